use crate::types::record::{SchemaKind, StatRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    CornersFor,
    CornersAgainst,
    XgFromCornersFor,
    XgFromCornersAgainst,
    ShotsFromCornersFor,
    ShotsFromCornersAgainst,
    GoalsFromCornersFor,
    GoalsFromCornersAgainst,
    Ppda,
    BuildUpTime,
    OpponentBuildUpTime,
    LongBallPct,
    OpponentLongBallPct,
    RecoveriesOppHalf,
    ZoneStartSequences,
    ZoneEndSequences,
    OpponentZoneStartSequences,
    OpponentZoneEndSequences,
    GroundDuelPct,
    AerialDuelPct,
    AssistsFromPass,
    GoldenZoneShots,
    OpenPlayCrosses,
    BoxShotsOnTarget,
    TotalShots,
    Weight,
    BodyFatPct,
    LeanMass,
    FatMass,
    MuscleMass,
}

pub struct Aliases {
    pub legacy: &'static [&'static str],
    pub descriptive: &'static [&'static str],
}

impl Field {
    pub const ALL: [Field; 30] = [
        Field::CornersFor,
        Field::CornersAgainst,
        Field::XgFromCornersFor,
        Field::XgFromCornersAgainst,
        Field::ShotsFromCornersFor,
        Field::ShotsFromCornersAgainst,
        Field::GoalsFromCornersFor,
        Field::GoalsFromCornersAgainst,
        Field::Ppda,
        Field::BuildUpTime,
        Field::OpponentBuildUpTime,
        Field::LongBallPct,
        Field::OpponentLongBallPct,
        Field::RecoveriesOppHalf,
        Field::ZoneStartSequences,
        Field::ZoneEndSequences,
        Field::OpponentZoneStartSequences,
        Field::OpponentZoneEndSequences,
        Field::GroundDuelPct,
        Field::AerialDuelPct,
        Field::AssistsFromPass,
        Field::GoldenZoneShots,
        Field::OpenPlayCrosses,
        Field::BoxShotsOnTarget,
        Field::TotalShots,
        Field::Weight,
        Field::BodyFatPct,
        Field::LeanMass,
        Field::FatMass,
        Field::MuscleMass,
    ];

    pub fn key(self) -> &'static str {
        self.aliases().legacy[0]
    }

    pub fn aliases(self) -> Aliases {
        // The generic "corners"/"xG" spellings sit last so that a file that
        // carries both for and against columns resolves the specific ones.
        let (legacy, descriptive): (&[&str], &[&str]) = match self {
            Field::CornersFor => (
                &["corners_for", "corners", "Corners"],
                &["Corners (for)", "Corners won", "Corner kicks"],
            ),
            Field::CornersAgainst => (
                &["corners_against", "corners", "Corners"],
                &["Corners (against)", "Corners conceded", "Corner kicks"],
            ),
            Field::XgFromCornersFor => (
                &["xg_corners_for", "xG_corners", "xg_corners"],
                &["xG from corners", "xG from corners (for)"],
            ),
            Field::XgFromCornersAgainst => (
                &["xg_corners_against", "xG_corners", "xg_corners"],
                &["xG conceded from corners", "xG from corners (against)", "xG from corners"],
            ),
            Field::ShotsFromCornersFor => (
                &["shots_corners_for", "shots_corners"],
                &["Shots from corners", "Shots from corners (for)"],
            ),
            Field::ShotsFromCornersAgainst => (
                &["shots_corners_against", "shots_corners"],
                &["Shots conceded from corners", "Shots from corners (against)", "Shots from corners"],
            ),
            Field::GoalsFromCornersFor => (
                &["goals_corners_for", "goals_corners"],
                &["Goals from corners", "Goals from corners (for)"],
            ),
            Field::GoalsFromCornersAgainst => (
                &["goals_corners_against", "goals_corners"],
                &["Goals conceded from corners", "Goals from corners (against)", "Goals from corners"],
            ),
            Field::Ppda => (&["ppda", "PPDA"], &["Passes per defensive action", "Pressing intensity"]),
            Field::BuildUpTime => (
                &["buildup_time", "build_up_time"],
                &["Ball progression time", "Build-up time"],
            ),
            Field::OpponentBuildUpTime => (
                &["opp_buildup_time", "opp_build_up_time"],
                &["Opponent ball progression time", "Opponent build-up time"],
            ),
            Field::LongBallPct => (&["long_ball_pct", "long_balls_pct"], &["Long balls %", "Long ball %"]),
            Field::OpponentLongBallPct => (
                &["opp_long_ball_pct", "opp_long_balls_pct"],
                &["Opponent long balls %", "Opponent long ball %"],
            ),
            Field::RecoveriesOppHalf => (
                &["recoveries_opp_half", "high_recoveries"],
                &["Possession recoveries in opponent half", "Recoveries in opponent half"],
            ),
            Field::ZoneStartSequences => (
                &["zone_start", "seq_zone_start"],
                &["Sequences started in zone", "Zone start sequences"],
            ),
            Field::ZoneEndSequences => (
                &["zone_end", "seq_zone_end"],
                &["Sequences ending in final third", "Zone end sequences"],
            ),
            Field::OpponentZoneStartSequences => (
                &["opp_zone_start", "opp_seq_zone_start"],
                &["Opponent sequences started in zone", "Opponent zone start sequences"],
            ),
            Field::OpponentZoneEndSequences => (
                &["opp_zone_end", "opp_seq_zone_end"],
                &["Opponent sequences ending in final third", "Opponent zone end sequences"],
            ),
            Field::GroundDuelPct => (
                &["ground_duels_pct", "ground_duel_pct"],
                &["Ground duels won %", "Ground duels %"],
            ),
            Field::AerialDuelPct => (
                &["aerial_duels_pct", "aerial_duel_pct"],
                &["Aerial duels won %", "Aerial duels %"],
            ),
            Field::AssistsFromPass => (
                &["assists_pass", "pass_assists"],
                &["Assists from passes", "Shot assists from passes"],
            ),
            Field::GoldenZoneShots => (
                &["shots_golden_zone", "golden_zone_shots"],
                &["Shots from golden zone", "Shots from the golden zone"],
            ),
            Field::OpenPlayCrosses => (
                &["crosses_open_play", "open_play_crosses"],
                &["Open play crosses", "Crosses from open play"],
            ),
            Field::BoxShotsOnTarget => (
                &["sot_penalty_area", "sot_box"],
                &["Shots on goal from penalty area", "Shots on target from the box"],
            ),
            Field::TotalShots => (
                &["shots_total", "shots"],
                &["Total shots (incl. blocked)", "Total shots", "Shots"],
            ),
            Field::Weight => (&["weight", "weight_kg"], &["Weight", "Weight (kg)", "Body weight"]),
            Field::BodyFatPct => (&["fat_pct", "body_fat_pct"], &["Fat %", "Body fat %", "Body fat (%)"]),
            Field::LeanMass => (&["lean_mass", "lean_mass_kg"], &["Lean mass", "Lean mass (kg)"]),
            Field::FatMass => (&["fat_mass", "fat_mass_kg"], &["Fat mass", "Fat mass (kg)"]),
            Field::MuscleMass => (&["muscle_mass", "muscle_mass_kg"], &["Muscle mass", "Muscle mass (kg)"]),
        };
        Aliases {
            legacy,
            descriptive,
        }
    }

    fn spellings(self, schema: SchemaKind) -> impl Iterator<Item = &'static str> {
        let aliases = self.aliases();
        let (first, second) = match schema {
            SchemaKind::Legacy => (aliases.legacy, aliases.descriptive),
            SchemaKind::Descriptive => (aliases.descriptive, aliases.legacy),
        };
        first.iter().chain(second.iter()).copied()
    }
}

/// First value present for `field`, or `0.0` when the export lacks it.
pub fn extract(record: &StatRecord, field: Field) -> f64 {
    lookup(record, field).unwrap_or(0.0)
}

pub fn is_present(record: &StatRecord, field: Field) -> bool {
    lookup(record, field).is_some()
}

fn lookup(record: &StatRecord, field: Field) -> Option<f64> {
    field
        .spellings(record.schema)
        .find_map(|column| record.get(column))
}

pub fn detect_schema<'a>(headers: impl IntoIterator<Item = &'a str>) -> SchemaKind {
    let mut legacy = 0usize;
    let mut descriptive = 0usize;
    for header in headers {
        let header = header.trim();
        for field in Field::ALL {
            let aliases = field.aliases();
            if aliases.legacy.contains(&header) {
                legacy += 1;
                break;
            }
            if aliases.descriptive.contains(&header) {
                descriptive += 1;
                break;
            }
        }
    }
    if descriptive > legacy {
        SchemaKind::Descriptive
    } else {
        SchemaKind::Legacy
    }
}

pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn percentage(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}
