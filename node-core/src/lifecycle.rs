// Tick and report counters driving report cycles and scheduled restarts

/// What the sampling loop has to do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Keep sampling.
    Continue,
    /// The window is complete: report and reset the averagers.
    ReportDue,
    /// The window is complete and so is the restart period: report,
    /// reset, then restart the device.
    RestartDue,
}

/// Counters owned by the sampling loop. Nothing else advances them.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    window_size: u32,
    reports_per_restart: u32,
    tick_count: u32,
    report_count: u32,
}

impl Lifecycle {
    pub fn new(window_size: u32, reports_per_restart: u32) -> Self {
        Self {
            window_size: window_size.max(1),
            reports_per_restart: reports_per_restart.max(1),
            tick_count: 0,
            report_count: 0,
        }
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn report_count(&self) -> u32 {
        self.report_count
    }

    pub fn reports_per_restart(&self) -> u32 {
        self.reports_per_restart
    }

    /// Record one completed tick.
    pub(crate) fn advance(&mut self) -> LifecycleEvent {
        self.tick_count += 1;
        if self.tick_count < self.window_size {
            return LifecycleEvent::Continue;
        }

        self.tick_count = 0;
        self.report_count += 1;
        if self.report_count < self.reports_per_restart {
            return LifecycleEvent::ReportDue;
        }

        // The restart wipes the process; mirror that here so a
        // restart that returns (tests) starts a fresh period.
        self.report_count = 0;
        LifecycleEvent::RestartDue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_every_window() {
        let mut lifecycle = Lifecycle::new(3, 10);
        assert_eq!(lifecycle.advance(), LifecycleEvent::Continue);
        assert_eq!(lifecycle.advance(), LifecycleEvent::Continue);
        assert_eq!(lifecycle.tick_count(), 2);
        assert_eq!(lifecycle.advance(), LifecycleEvent::ReportDue);
        assert_eq!(lifecycle.tick_count(), 0);
        assert_eq!(lifecycle.report_count(), 1);
    }

    #[test]
    fn test_restart_after_window_times_reports() {
        let (window, reports) = (4, 3);
        let mut lifecycle = Lifecycle::new(window, reports);

        let events: Vec<_> = (0..window * reports).map(|_| lifecycle.advance()).collect();

        let restarts: Vec<_> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == LifecycleEvent::RestartDue)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(restarts, vec![(window * reports) as usize]);
        assert_eq!(events.iter().filter(|e| **e == LifecycleEvent::ReportDue).count(), 2);
        assert_eq!(lifecycle.tick_count(), 0);
        assert_eq!(lifecycle.report_count(), 0);
    }

    #[test]
    fn test_window_of_one() {
        let mut lifecycle = Lifecycle::new(1, 2);
        assert_eq!(lifecycle.advance(), LifecycleEvent::ReportDue);
        assert_eq!(lifecycle.advance(), LifecycleEvent::RestartDue);
    }
}
