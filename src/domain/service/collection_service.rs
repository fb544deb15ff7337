use crate::domain::model::*;
use chrono::{Datelike, Duration, NaiveDateTime};
use tracing::debug;

/// Collection windows of `plan` that start before `now`, oldest first.
///
/// Days advance with calendar arithmetic, so a step crossing a month end
/// lands on the right day of the next month.
pub fn plan_windows(plan: &CollectionPlan, now: NaiveDateTime) -> Vec<CollectionWindow> {
    let step = Duration::days(i64::from(plan.step_days.max(1)));
    let mut windows = Vec::new();
    let mut day = plan.start;

    loop {
        let (since, until) = match (
            day.and_hms_opt(plan.window_start_hour, 0, 0),
            day.and_hms_opt(plan.window_end_hour, 0, 0),
        ) {
            (Some(since), Some(until)) => (since, until),
            _ => break,
        };
        if since >= now {
            break;
        }
        let output = plan.output_dir.join(format!(
            "{}_{}_{:02}.csv",
            day.year(),
            day.day(),
            day.month()
        ));
        debug!(%since, %until, output = %output.display(), "planned window");
        windows.push(CollectionWindow {
            query: plan.query.clone(),
            since,
            until,
            output,
        });
        day = match day.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }
    windows
}

#[derive(Clone, Default)]
pub struct CollectionService {
    plan: CollectionPlan,
}

impl CollectionService {
    pub fn new(plan: CollectionPlan) -> Self {
        Self { plan }
    }

    pub fn windows_until(&self, now: NaiveDateTime) -> Vec<CollectionWindow> {
        plan_windows(&self.plan, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn it_should_step_a_week_across_month_ends() {
        let windows = plan_windows(&CollectionPlan::default(), at(2020, 7, 4, 0));
        let outputs: Vec<PathBuf> = windows.iter().map(|w| w.output.clone()).collect();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("tweets/2020_19_06.csv"),
                PathBuf::from("tweets/2020_26_06.csv"),
                PathBuf::from("tweets/2020_3_07.csv"),
            ]
        );
        assert_eq!(windows[2].since, at(2020, 7, 3, 19));
        assert_eq!(windows[2].until, at(2020, 7, 3, 21));
        assert_eq!(windows[2].query, "quarentena OR isolamento");
    }

    #[test]
    fn it_should_stop_at_now() {
        let plan = CollectionPlan::default();
        assert!(plan_windows(&plan, at(2020, 6, 19, 19)).is_empty());
        assert_eq!(plan_windows(&plan, at(2020, 6, 19, 20)).len(), 1);
    }

    #[test]
    fn it_should_use_configured_values() {
        let plan = CollectionPlan {
            query: "covid".to_string(),
            start: NaiveDate::from_ymd_opt(2020, 12, 30).unwrap(),
            window_start_hour: 8,
            window_end_hour: 9,
            step_days: 3,
            output_dir: PathBuf::from("out"),
        };
        let service = CollectionService::new(plan);
        let windows = service.windows_until(at(2021, 1, 3, 0));
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].since, at(2021, 1, 2, 8));
        assert_eq!(windows[1].output, PathBuf::from("out/2021_2_01.csv"));
    }

    #[test]
    fn it_should_skip_invalid_hours() {
        let plan = CollectionPlan {
            window_end_hour: 25,
            ..Default::default()
        };
        assert!(plan_windows(&plan, at(2021, 1, 1, 0)).is_empty());
    }
}
