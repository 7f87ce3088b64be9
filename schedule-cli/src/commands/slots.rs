use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_core::config::ScheduleConfig;
use schedule_core::layout::time_slots;

pub fn run(config: &ScheduleConfig) -> Result<()> {
    for slot in time_slots() {
        let top = f64::from(slot.hour) * config.pixels_per_hour;
        let offset = format!("{:>6}px", top);
        println!("{}  {}", slot.label, offset.dimmed());
    }
    Ok(())
}
