use crate::fields::{extract, Field};
use crate::identity::{AliasTable, IdentityResolver};
use crate::types::config::{BenchmarkRange, ClubConfig};
use crate::types::record::StatRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

const DATE_LABEL_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyMetric {
    Weight,
    BodyFat,
    LeanMass,
    FatMass,
    MuscleMass,
}

impl BodyMetric {
    pub fn field(self) -> Field {
        match self {
            Self::Weight => Field::Weight,
            Self::BodyFat => Field::BodyFatPct,
            Self::LeanMass => Field::LeanMass,
            Self::FatMass => Field::FatMass,
            Self::MuscleMass => Field::MuscleMass,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight (kg)",
            Self::BodyFat => "Body fat %",
            Self::LeanMass => "Lean mass (kg)",
            Self::FatMass => "Fat mass (kg)",
            Self::MuscleMass => "Muscle mass (kg)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySort {
    Value,
    Delta,
    Benchmark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub date: NaiveDate,
    pub record: StatRecord,
}

impl Measurement {
    pub fn value(&self, metric: BodyMetric) -> f64 {
        extract(&self.record, metric.field())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    pub identity: String,
    measurements: Vec<Measurement>,
}

impl MeasurementSeries {
    pub fn new(identity: impl Into<String>, mut measurements: Vec<Measurement>) -> Self {
        measurements.sort_by_key(|measurement| measurement.date);
        Self {
            identity: identity.into(),
            measurements,
        }
    }

    pub fn group(measurements: Vec<Measurement>, resolver: &IdentityResolver) -> Vec<Self> {
        let mut order: Vec<(String, Vec<Measurement>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for measurement in measurements {
            let key = resolver.resolve(measurement.record.name()).key().to_string();
            match index.get(&key) {
                Some(&slot) => order[slot].1.push(measurement),
                None => {
                    index.insert(key, order.len());
                    order.push((measurement.record.name().to_string(), vec![measurement]));
                }
            }
        }
        order
            .into_iter()
            .map(|(identity, measurements)| Self::new(identity, measurements))
            .collect()
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn latest(&self) -> Option<&Measurement> {
        self.measurements.last()
    }

    pub fn previous(&self) -> Option<&Measurement> {
        self.measurements.iter().rev().nth(1)
    }

    pub fn count(&self) -> usize {
        self.measurements.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendInfo {
    pub delta: f64,
    pub is_first_measurement: bool,
    pub count: usize,
    pub date_range_label: String,
}

pub fn trend_info(series: &MeasurementSeries, metric: BodyMetric) -> TrendInfo {
    let count = series.count();
    let date_range_label = match (series.measurements().first(), series.latest()) {
        (Some(first), Some(last)) if count > 1 => format!(
            "{} – {}",
            first.date.format(DATE_LABEL_FORMAT),
            last.date.format(DATE_LABEL_FORMAT)
        ),
        (Some(only), _) => only.date.format(DATE_LABEL_FORMAT).to_string(),
        _ => String::new(),
    };

    let delta = match (series.latest(), series.previous()) {
        (Some(latest), Some(previous)) => latest.value(metric) - previous.value(metric),
        _ => 0.0,
    };

    TrendInfo {
        delta,
        is_first_measurement: count < 2,
        count,
        date_range_label,
    }
}

#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    resolver: IdentityResolver,
    ranges: HashMap<String, BenchmarkRange>,
}

impl BenchmarkTable {
    pub fn new<'a>(
        aliases: AliasTable,
        ranges: impl IntoIterator<Item = (&'a str, BenchmarkRange)>,
    ) -> Self {
        let ranges: Vec<(&str, BenchmarkRange)> = ranges.into_iter().collect();
        let resolver = IdentityResolver::new(aliases).with_known(ranges.iter().map(|(name, _)| *name));
        let ranges = ranges
            .into_iter()
            .map(|(name, range)| (resolver.resolve(name).key().to_string(), range))
            .collect();
        Self { resolver, ranges }
    }

    pub fn from_config(config: &ClubConfig) -> Self {
        Self::new(
            AliasTable::from_config(&config.aliases()),
            config
                .benchmarks
                .iter()
                .map(|(name, range)| (name.as_str(), *range)),
        )
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn range(&self, identity: &str) -> Option<BenchmarkRange> {
        self.ranges
            .get(self.resolver.resolve(identity).key())
            .copied()
    }

    /// 0 inside `[min, max]`, distance to the violated bound outside it, and
    /// `+inf` for a player with no benchmark.
    pub fn distance(&self, identity: &str, value: f64) -> f64 {
        match self.range(identity) {
            Some(range) => distance_from_range(range, value),
            None => f64::INFINITY,
        }
    }
}

pub fn distance_from_range(range: BenchmarkRange, value: f64) -> f64 {
    if value < range.min {
        range.min - value
    } else if value > range.max {
        value - range.max
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BodyRow {
    pub name: String,
    pub latest: f64,
    pub trend: TrendInfo,
    pub body_fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<(f64, f64)>,
    pub benchmark_distance: f64,
}

impl BodyRow {
    pub fn has_benchmark(&self) -> bool {
        self.benchmark_distance.is_finite()
    }
}

pub fn body_rows(
    series: &[MeasurementSeries],
    metric: BodyMetric,
    benchmarks: &BenchmarkTable,
) -> Vec<BodyRow> {
    series
        .iter()
        .filter_map(|series| {
            let latest = series.latest()?;
            let body_fat = latest.value(BodyMetric::BodyFat);
            Some(BodyRow {
                name: series.identity.clone(),
                latest: latest.value(metric),
                trend: trend_info(series, metric),
                body_fat,
                benchmark: benchmarks
                    .range(&series.identity)
                    .map(|range| (range.min, range.max)),
                benchmark_distance: benchmarks.distance(&series.identity, body_fat),
            })
        })
        .collect()
}

pub fn sort_rows(rows: &mut [BodyRow], sort: BodySort) {
    match sort {
        BodySort::Value => rows.sort_by(|a, b| a.latest.total_cmp(&b.latest)),
        BodySort::Delta => rows.sort_by(|a, b| {
            a.trend
                .is_first_measurement
                .cmp(&b.trend.is_first_measurement)
                .then_with(|| b.trend.delta.total_cmp(&a.trend.delta))
        }),
        BodySort::Benchmark => rows.sort_by(|a, b| {
            b.has_benchmark()
                .cmp(&a.has_benchmark())
                .then_with(|| b.benchmark_distance.total_cmp(&a.benchmark_distance))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::{EntityId, SchemaKind};

    fn measurement(name: &str, date: (i32, u32, u32), weight: f64, fat: f64) -> Measurement {
        Measurement {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
            record: StatRecord::new(EntityId::named(name), SchemaKind::Legacy)
                .with_value("weight", weight)
                .with_value("fat_pct", fat),
        }
    }

    fn table() -> BenchmarkTable {
        BenchmarkTable::new(
            AliasTable::default(),
            [
                ("Ziv Ben Shimol", BenchmarkRange { min: 8.0, max: 11.0 }),
                ("Omer Atzili", BenchmarkRange { min: 9.0, max: 12.0 }),
            ],
        )
    }

    #[test]
    fn single_measurement_is_first_with_zero_delta() {
        let series = MeasurementSeries::new("A", vec![measurement("A", (2024, 9, 1), 78.0, 11.0)]);
        let info = trend_info(&series, BodyMetric::Weight);
        assert!(info.is_first_measurement);
        assert_eq!(info.delta, 0.0);
        assert_eq!(info.count, 1);
        assert_eq!(info.date_range_label, "01/09/2024");
    }

    #[test]
    fn delta_uses_last_two_measurements_after_sorting() {
        let series = MeasurementSeries::new(
            "A",
            vec![
                measurement("A", (2024, 10, 1), 77.0, 10.5),
                measurement("A", (2024, 8, 1), 80.0, 12.0),
                measurement("A", (2024, 9, 1), 78.5, 11.0),
            ],
        );
        let info = trend_info(&series, BodyMetric::Weight);
        assert!(!info.is_first_measurement);
        assert!((info.delta - (77.0 - 78.5)).abs() < 1e-9);
        assert_eq!(info.count, 3);
        assert_eq!(info.date_range_label, "01/08/2024 – 01/10/2024");
    }

    #[test]
    fn empty_series_has_no_label() {
        let info = trend_info(&MeasurementSeries::new("A", Vec::new()), BodyMetric::Weight);
        assert!(info.is_first_measurement);
        assert!(info.date_range_label.is_empty());
    }

    #[test]
    fn benchmark_distance_is_zero_inside_inclusive_range() {
        let table = table();
        assert_eq!(table.distance("Ziv Ben Shimol", 8.0), 0.0);
        assert_eq!(table.distance("Ziv Ben Shimol", 11.0), 0.0);
        assert_eq!(table.distance("Ziv Ben Shimol", 9.7), 0.0);
    }

    #[test]
    fn benchmark_distance_measures_violated_bound() {
        let table = table();
        assert!((table.distance("Ziv Ben Shimol", 6.5) - 1.5).abs() < 1e-9);
        assert!((table.distance("Ziv Ben Shimol", 13.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn missing_benchmark_is_infinite() {
        assert_eq!(table().distance("Unknown Player", 10.0), f64::INFINITY);
    }

    #[test]
    fn benchmark_lookup_normalizes_identity() {
        let mut aliases = AliasTable::default();
        aliases.insert("Ziv Ben Shimol", &["Z. Ben Shimol".to_string()]);
        let table = BenchmarkTable::new(
            aliases,
            [("Ziv Ben Shimol", BenchmarkRange { min: 8.0, max: 11.0 })],
        );
        assert_eq!(table.distance("ziv ben shimol ", 12.0), 1.0);
        assert_eq!(table.distance("Z. Ben Shimol", 12.0), 1.0);
        assert!(table.range("Zív Ben Shimol").is_some());
    }

    #[test]
    fn benchmark_sort_puts_missing_benchmarks_last() {
        let series = MeasurementSeries::group(
            vec![
                measurement("Unknown Player", (2024, 9, 1), 70.0, 30.0),
                measurement("Ziv Ben Shimol", (2024, 9, 1), 75.0, 11.5),
                measurement("Omer Atzili", (2024, 9, 1), 72.0, 16.0),
            ],
            &IdentityResolver::default(),
        );
        let mut rows = body_rows(&series, BodyMetric::BodyFat, &table());
        sort_rows(&mut rows, BodySort::Benchmark);
        let order: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(order, vec!["Omer Atzili", "Ziv Ben Shimol", "Unknown Player"]);
        assert!(!rows[2].has_benchmark());
    }

    #[test]
    fn delta_sort_pushes_first_measurements_last() {
        let series = MeasurementSeries::group(
            vec![
                measurement("New", (2024, 9, 1), 90.0, 12.0),
                measurement("Loser", (2024, 8, 1), 80.0, 12.0),
                measurement("Loser", (2024, 9, 1), 78.0, 12.0),
                measurement("Gainer", (2024, 8, 1), 70.0, 12.0),
                measurement("Gainer", (2024, 9, 1), 71.0, 12.0),
            ],
            &IdentityResolver::default(),
        );
        let mut rows = body_rows(&series, BodyMetric::Weight, &table());
        sort_rows(&mut rows, BodySort::Delta);
        let order: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(order, vec!["Gainer", "Loser", "New"]);
    }

    #[test]
    fn value_sort_is_ascending() {
        let series = MeasurementSeries::group(
            vec![
                measurement("Heavy", (2024, 9, 1), 90.0, 12.0),
                measurement("Light", (2024, 9, 1), 65.0, 12.0),
            ],
            &IdentityResolver::default(),
        );
        let mut rows = body_rows(&series, BodyMetric::Weight, &table());
        sort_rows(&mut rows, BodySort::Value);
        assert_eq!(rows[0].name, "Light");
    }

    #[test]
    fn group_merges_spelling_variants() {
        let series = MeasurementSeries::group(
            vec![
                measurement("José Pérez", (2024, 9, 1), 80.0, 12.0),
                measurement("jose perez", (2024, 8, 1), 81.0, 12.0),
            ],
            &IdentityResolver::default(),
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].identity, "José Pérez");
        assert_eq!(series[0].count(), 2);
        assert_eq!(
            series[0].latest().map(|m| m.date),
            NaiveDate::from_ymd_opt(2024, 9, 1)
        );
    }

    #[test]
    fn group_merges_configured_aliases() {
        let mut aliases = AliasTable::default();
        aliases.insert("Ziv Ben Shimol", &["Z. Ben Shimol".to_string()]);
        let resolver = IdentityResolver::new(aliases);
        let series = MeasurementSeries::group(
            vec![
                measurement("Z. Ben Shimol", (2024, 8, 1), 78.0, 13.0),
                measurement("Ziv Ben Shimol", (2024, 9, 1), 77.0, 12.0),
                measurement("Omer Atzili", (2024, 9, 1), 72.0, 9.8),
            ],
            &resolver,
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].identity, "Z. Ben Shimol");
        assert_eq!(series[0].count(), 2);
        let trend = trend_info(&series[0], BodyMetric::BodyFat);
        assert_eq!(trend.delta, -1.0);
    }
}
