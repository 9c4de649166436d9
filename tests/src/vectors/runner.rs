//! Executes vector cases against the streaming engine

use shastream_algorithms::hash::{Sha2, Sha2Digest, Variant};

use super::error::{Result, VectorError};
use super::model::{TestCase, TestGroup, TestSuite, TestType};

const MCT_ITERATIONS: usize = 1000;

// Streaming writes in LDT cases use this many bytes per call, so most
// writes straddle a block boundary.
const LDT_WRITE_SIZE: usize = 1000;

/// Outcome of running a whole suite
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub failures: Vec<(String, VectorError)>,
}

/// Run every case of every group, collecting failures instead of stopping
pub fn run_suite(suite: &TestSuite) -> SuiteReport {
    let mut report = SuiteReport::default();
    for group in &suite.groups {
        for case in &group.cases {
            match run_case(group, case) {
                Ok(()) => report.passed += 1,
                Err(err) => report.failures.push((group.algorithm.clone(), err)),
            }
        }
    }
    report
}

/// Run one case of `group`
pub fn run_case(group: &TestGroup, case: &TestCase) -> Result<()> {
    let variant: Variant = group.algorithm.parse()?;

    let digest = match group.test_type {
        TestType::Aft => {
            let msg = field(case, case.msg.as_deref(), "msg")?;
            Sha2::digest(variant, &hex::decode(msg)?)?
        }
        TestType::Mct => {
            let seed = field(case, case.seed.as_deref(), "seed")?;
            monte_carlo(variant, &hex::decode(seed)?)?
        }
        TestType::Ldt => {
            let content = hex::decode(field(case, case.content.as_deref(), "content")?)?;
            if content.is_empty() {
                return Err(VectorError::MissingField {
                    case: case.id,
                    field: "content",
                });
            }
            let length = case.length.ok_or(VectorError::MissingField {
                case: case.id,
                field: "length",
            })?;
            large_data(variant, &content, length)?
        }
    };

    let actual = digest.to_hex();
    if actual != case.md {
        return Err(VectorError::Mismatch {
            case: case.id,
            expected: case.md.clone(),
            actual,
        });
    }
    Ok(())
}

fn field<'a>(case: &TestCase, value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    value.ok_or(VectorError::MissingField {
        case: case.id,
        field: name,
    })
}

// MD[0] = seed, MD[1] = H(MD[0]), MD[2] = H(MD[1]),
// MD[j] = H(MD[j-3] || MD[j-2] || MD[j-1])
fn monte_carlo(variant: Variant, seed: &[u8]) -> Result<Sha2Digest> {
    let first = Sha2::digest(variant, seed)?;
    let second = Sha2::digest(variant, &first)?;
    let mut window: [Vec<u8>; 3] = [seed.to_vec(), first.to_vec(), second.to_vec()];
    let mut last = second;

    for _ in 3..MCT_ITERATIONS {
        let mut engine = Sha2::new(variant);
        for md in &window {
            engine.write(md)?;
        }
        last = engine.sum()?;
        window.rotate_left(1);
        window[2] = last.to_vec();
    }
    Ok(last)
}

fn large_data(variant: Variant, content: &[u8], length: u64) -> Result<Sha2Digest> {
    let mut engine = Sha2::new(variant);
    let mut pending = Vec::with_capacity(LDT_WRITE_SIZE + content.len());
    let mut remaining = length as usize;

    while remaining > 0 {
        while pending.len() < LDT_WRITE_SIZE.min(remaining) {
            pending.extend_from_slice(content);
        }
        let take = LDT_WRITE_SIZE.min(remaining);
        engine.write(&pending[..take])?;
        pending.drain(..take);
        remaining -= take;
    }
    Ok(engine.sum()?)
}
