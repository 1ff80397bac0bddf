use chrono::{DateTime, FixedOffset, TimeDelta};
use log::debug;
use crate::models::forecast::ForecastSeries;
use crate::models::suitable_window::SuitableWindow;
use crate::settings::Thresholds;

/// A run of suitable hours under construction, bounded by the effective start of its
/// first and last hour
#[derive(Debug, Clone, PartialEq)]
struct TimeGroup {
    time_from: DateTime<FixedOffset>,
    time_to: DateTime<FixedOffset>,
    indexes: Vec<usize>,
}

impl TimeGroup {
    fn start(hour: usize, time: DateTime<FixedOffset>) -> TimeGroup {
        debug!("opening group at {}", time);
        TimeGroup { time_from: time, time_to: time, indexes: vec![hour] }
    }

    /// Returns a new group with the given hour appended
    fn extend(self, hour: usize, time: DateTime<FixedOffset>) -> TimeGroup {
        let mut indexes = self.indexes;
        indexes.push(hour);

        TimeGroup { time_from: self.time_from, time_to: time, indexes }
    }

    /// An hour starting no more than one hour after the group's last hour continues the run
    fn is_contiguous(&self, time: DateTime<FixedOffset>) -> bool {
        time - self.time_to <= TimeDelta::hours(1)
    }
}

/// Groups suitable hours into contiguous windows and summarizes each window.
/// Windows shorter than `min_hours` are discarded.
///
/// # Arguments
///
/// * 'series' - the hourly forecast
/// * 'suitable_hours' - ascending indexes of suitable hours into the series
/// * 'min_hours' - minimum number of hours for a window to be reported
/// * 'thresholds' - limits deciding whether a window is perfect
pub fn aggregate_windows(series: &ForecastSeries, suitable_hours: &[usize], min_hours: usize, thresholds: &Thresholds) -> Vec<SuitableWindow> {
    let (mut windows, last) = suitable_hours.iter().fold(
        (Vec::new(), None),
        |(mut windows, current): (Vec<SuitableWindow>, Option<TimeGroup>), &hour| {
            let time = series.effective_start(hour);
            let next = match current {
                None => TimeGroup::start(hour, time),
                Some(group) if group.is_contiguous(time) => group.extend(hour, time),
                Some(group) => {
                    windows.extend(finalize(series, &group, min_hours, thresholds));
                    TimeGroup::start(hour, time)
                },
            };
            (windows, Some(next))
        });

    if let Some(group) = last {
        windows.extend(finalize(series, &group, min_hours, thresholds));
    }

    windows
}

/// Turns a closed group into a window, or None if the group is too short
///
/// # Arguments
///
/// * 'series' - the hourly forecast
/// * 'group' - the closed group
/// * 'min_hours' - minimum number of hours for a window to be reported
/// * 'thresholds' - limits deciding whether a window is perfect
fn finalize(series: &ForecastSeries, group: &TimeGroup, min_hours: usize, thresholds: &Thresholds) -> Option<SuitableWindow> {
    let hours = group.indexes.len();
    debug!("closing group {} - {} with {} hour(s)", group.time_from, group.time_to, hours);
    if hours < min_hours {
        debug!("discarding {} hour(s) from {}, less than {}", hours, group.time_from, min_hours);
        return None;
    }

    let mean = |values: &dyn Fn(usize) -> f64| group.indexes.iter().map(|&i| values(i)).sum::<f64>() / hours as f64;

    let avg_temperature_2m = mean(&|i| series.temperature_2m[i]);
    let avg_weathercode = mean(&|i| series.weathercode[i] as f64);

    let window = SuitableWindow {
        time_from: group.time_from,
        time_to: group.time_to + TimeDelta::hours(1),
        hours,
        perfect: avg_weathercode == thresholds.perfect_weathercode
            && avg_temperature_2m >= thresholds.perfect_min_temperature,
        avg_temperature_2m,
        avg_precipitation_probability: mean(&|i| series.precipitation_probability[i]),
        avg_cloudcover: mean(&|i| series.cloudcover[i]),
        avg_weathercode,
        max_uv_index: group.indexes.iter().map(|&i| series.uv_index[i]).fold(f64::NEG_INFINITY, f64::max),
    };
    debug!("window {}", window);

    Some(window)
}
