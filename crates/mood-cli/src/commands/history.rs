use anyhow::Result;
use mood_core::mood::MoodHistoryRepository;

use super::Context;

pub async fn run(context: &Context, recent: usize) -> Result<()> {
    let repository = context.repository();
    let Some(records) = repository.load_recent(recent).await? else {
        println!("No mood data found.");
        return Ok(());
    };

    if records.is_empty() {
        println!("No mood records yet.");
        return Ok(());
    }

    println!(
        "{:<10}  {:>6}  {:>9}  {:>7}  {}",
        "day", "sad", "surprised", "neutral", "mood"
    );
    for record in &records {
        println!(
            "{:<10}  {:>6.2}  {:>9.2}  {:>7.2}  {}",
            record.day,
            record.sad_value,
            record.surprised_value,
            record.neutral_value,
            record.label()
        );
    }

    Ok(())
}
