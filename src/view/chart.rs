//! Chart data provider
//!
//! Turns a [`DailyAggregate`] into line-chart input: date labels, one numeric
//! series, and a time-axis configuration. Serializes to the JSON shape a
//! Chart.js `Line` expects.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::DailyAggregate;
use crate::config::ChartConfig;
use crate::dataset::parse_date;

/// Labels and series for a line chart
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// One label per aggregate key; `None` when the key is not a valid date
    pub labels: Vec<Option<NaiveDate>>,
    pub datasets: Vec<ChartSeries>,
}

/// A single plotted series
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
}

impl ChartData {
    /// Build chart input from per-date totals, keeping aggregate order
    pub fn from_aggregate(totals: &DailyAggregate, config: &ChartConfig) -> Self {
        Self {
            labels: totals.dates().into_iter().map(parse_date).collect(),
            datasets: vec![ChartSeries {
                label: config.series_label.clone(),
                data: totals.amounts(),
                border_color: config.border_color.clone(),
                background_color: config.background_color.clone(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Plottable points of the first series, sorted by date.
    ///
    /// Labels that did not parse are dropped, as a time axis cannot place them.
    pub fn points(&self) -> Vec<(NaiveDate, f64)> {
        let Some(series) = self.datasets.first() else {
            return Vec::new();
        };

        let mut points: Vec<(NaiveDate, f64)> = self
            .labels
            .iter()
            .zip(&series.data)
            .filter_map(|(label, value)| label.map(|date| (date, *value)))
            .collect();
        points.sort_by_key(|(date, _)| *date);
        points
    }
}

/// Chart configuration object
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartOptions {
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Scales {
    pub x: TimeAxis,
    pub y: ValueAxis,
}

/// Horizontal time axis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub time: TimeScale,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeScale {
    pub unit: String,
    pub parser: String,
    pub tooltip_format: String,
}

/// Vertical value axis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueAxis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl AxisTitle {
    fn shown(text: &str) -> Self {
        Self {
            display: true,
            text: text.to_string(),
        }
    }
}

impl ChartOptions {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            scales: Scales {
                x: TimeAxis {
                    kind: "time".to_string(),
                    time: TimeScale {
                        unit: config.time_unit.clone(),
                        parser: config.date_parser.clone(),
                        tooltip_format: config.tooltip_format.clone(),
                    },
                    title: AxisTitle::shown(&config.x_title),
                },
                y: ValueAxis {
                    title: AxisTitle::shown(&config.y_title),
                },
            },
        }
    }
}

/// What a chart widget needs: data and options
pub trait ChartSource {
    fn chart_data(&self) -> ChartData;
    fn chart_options(&self) -> ChartOptions;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Transaction;
    use crate::view::aggregate::daily_totals;

    fn totals() -> DailyAggregate {
        daily_totals(&[
            Transaction::new(1, "2024-01-03", 4.0),
            Transaction::new(1, "2024-01-01", 10.0),
            Transaction::new(1, "not-a-date", 2.0),
            Transaction::new(1, "2024-01-01", 5.0),
        ])
    }

    #[test]
    fn test_chart_data_follows_aggregate_order() {
        let data = ChartData::from_aggregate(&totals(), &ChartConfig::default());

        assert_eq!(
            data.labels,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 3),
                NaiveDate::from_ymd_opt(2024, 1, 1),
                None,
            ]
        );
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].data, vec![4.0, 15.0, 2.0]);
        assert_eq!(data.datasets[0].label, "Transaction Amount");
    }

    #[test]
    fn test_points_sorted_and_unparsable_dropped() {
        let data = ChartData::from_aggregate(&totals(), &ChartConfig::default());
        let points = data.points();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 15.0));
        assert_eq!(points[1], (NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 4.0));
    }

    #[test]
    fn test_empty_aggregate() {
        let data = ChartData::from_aggregate(&DailyAggregate::new(), &ChartConfig::default());
        assert!(data.is_empty());
        assert!(data.points().is_empty());
    }

    #[test]
    fn test_chart_json_shape() {
        let config = ChartConfig::default();
        let data = serde_json::to_value(ChartData::from_aggregate(&totals(), &config)).unwrap();
        let options = serde_json::to_value(ChartOptions::new(&config)).unwrap();

        assert_eq!(data["labels"][0], "2024-01-03");
        assert!(data["labels"][2].is_null());
        assert_eq!(data["datasets"][0]["borderColor"], "rgba(75, 192, 192, 1)");
        assert_eq!(data["datasets"][0]["backgroundColor"], "rgba(75, 192, 192, 0.2)");

        assert_eq!(options["scales"]["x"]["type"], "time");
        assert_eq!(options["scales"]["x"]["time"]["unit"], "day");
        assert_eq!(options["scales"]["x"]["time"]["parser"], "YYYY-MM-DD");
        assert_eq!(options["scales"]["x"]["time"]["tooltipFormat"], "ll");
        assert_eq!(options["scales"]["x"]["title"]["text"], "Date");
        assert_eq!(options["scales"]["y"]["title"]["text"], "Transaction Amount");
        assert_eq!(options["scales"]["y"]["title"]["display"], true);
    }
}
