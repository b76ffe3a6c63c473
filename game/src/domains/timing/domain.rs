use serde::Serialize;

#[derive(Default)]
pub struct TimingDomain {
    pub calendar: Calendar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calendar {
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Timing {
    DayStarted { day: u32 },
}
