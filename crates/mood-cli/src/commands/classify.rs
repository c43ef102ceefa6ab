use anyhow::Result;
use mood_core::mood::classify;

pub fn run(sad: f32, surprised: f32, neutral: f32) -> Result<()> {
    println!("{}", classify(sad, surprised, neutral));
    Ok(())
}
