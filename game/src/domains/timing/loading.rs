use crate::timing::{Calendar, TimingDomain};

impl TimingDomain {
    pub fn load_calendar(&mut self, calendar: Calendar) {
        self.calendar = calendar;
    }
}
