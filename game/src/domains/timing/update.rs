use log::info;

use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn update(&mut self) -> Vec<Timing> {
        self.calendar.days += 1;
        info!("Day {} started", self.calendar.days);
        vec![Timing::DayStarted {
            day: self.calendar.days,
        }]
    }
}
