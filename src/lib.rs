//! Reference table and log-log chart of RC low pass time constants against
//! their cutoff frequencies.
pub mod reference;
use anyhow::Context;
use reference::{ReferenceGenerator, ReferenceOutputs};
/// Runs `generator` once, reporting failures the way the binary prints them.
pub fn run(generator: &ReferenceGenerator) -> anyhow::Result<ReferenceOutputs> {
    generator
        .run()
        .context("failed to build the RC low pass filter reference")
}
