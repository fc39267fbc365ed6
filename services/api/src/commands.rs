use crate::infra::{build_service, catalog_source, load_catalog};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use steel_atlas::catalog::{CatalogFilter, SteelRecord};
use steel_atlas::config::AppConfig;
use steel_atlas::error::AppError;
use steel_atlas::heat_treat::{TemperatureUnit, TemperingReading};
use steel_atlas::recommend::{
    Answers, Maintenance, Priority, QuestionOption, ScoredResult, Sharpenability, UseCase,
};
use steel_atlas::SteelAtlasService;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// edc, kitchen, outdoor or hard-use
    #[arg(long)]
    pub(crate) use_case: Option<String>,
    /// edge, toughness or balanced
    #[arg(long)]
    pub(crate) priority: Option<String>,
    /// low or dont-mind
    #[arg(long)]
    pub(crate) maintenance: Option<String>,
    /// easy or maximum-edge
    #[arg(long)]
    pub(crate) sharpenability: Option<String>,
    /// Number of steels to show (capped by RECOMMENDATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Steel catalog CSV to rank instead of the configured source
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CurveArgs {
    /// Catalog id of the steel, e.g. cpm-magnacut
    #[arg(long)]
    pub(crate) steel: String,
    /// Tempering temperature to read
    #[arg(long)]
    pub(crate) temperature: f64,
    /// Temperature scale: c or f
    #[arg(long, default_value = "c", value_parser = parse_unit)]
    pub(crate) unit: TemperatureUnit,
    /// Print every point of the curve as well
    #[arg(long)]
    pub(crate) series: bool,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only steels from this producer
    #[arg(long)]
    pub(crate) producer: Option<String>,
    /// Case-insensitive substring of the id or name
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

fn parse_unit(raw: &str) -> Result<TemperatureUnit, String> {
    TemperatureUnit::parse(raw).ok_or_else(|| format!("unknown temperature unit '{raw}'"))
}

fn load_service(catalog: Option<PathBuf>) -> Result<SteelAtlasService, AppError> {
    let config = AppConfig::load()?;
    let source = catalog_source(catalog, &config.catalog);
    let catalog = load_catalog(source.as_deref())?;
    Ok(build_service(catalog, &config.catalog))
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = load_service(args.catalog.clone())?;
    let answers = answers_from_args(&args);
    let results = service.recommend(&answers, args.limit);
    print!("{}", render_recommendations(&answers, &results));
    Ok(())
}

pub(crate) fn run_curve(args: CurveArgs) -> Result<(), AppError> {
    let service = load_service(args.catalog)?;
    let reading = service.tempering(&args.steel, args.temperature, args.unit)?;
    print!("{}", render_reading(&reading, args.series));
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let service = load_service(args.catalog)?;
    let filter = CatalogFilter {
        producer: args.producer,
        search: args.search,
        ..CatalogFilter::default()
    };
    let steels = service.list(&filter);
    print!("{}", render_catalog(&steels));
    Ok(())
}

fn answers_from_args(args: &RecommendArgs) -> Answers {
    let pairs = [
        (UseCase::QUESTION, args.use_case.as_deref()),
        (Priority::QUESTION, args.priority.as_deref()),
        (Maintenance::QUESTION, args.maintenance.as_deref()),
        (Sharpenability::QUESTION, args.sharpenability.as_deref()),
    ];
    Answers::from_pairs(
        pairs
            .into_iter()
            .filter_map(|(question, option)| option.map(|option| (question, option))),
    )
}

fn render_recommendations(answers: &Answers, results: &[ScoredResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Recommendations for {} / {} / {} / {}",
        answers.use_case.key(),
        answers.priority.key(),
        answers.maintenance.key(),
        answers.sharpenability.key()
    );
    if results.is_empty() {
        let _ = writeln!(out, "  No steels in the catalog.");
        return out;
    }

    for (rank, result) in results.iter().enumerate() {
        let explanation = result
            .top_metrics
            .iter()
            .map(|entry| format!("{} {:.0}", entry.metric.label(), entry.value))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "  {:>2}. {:<20} {:>3}%  {}  [{}]",
            rank + 1,
            result.steel.name,
            result.match_score,
            result.steel.producer,
            explanation
        );
    }
    out
}

fn render_reading(reading: &TemperingReading, include_series: bool) -> String {
    let symbol = reading.unit.symbol();
    let mut out = String::new();
    match reading.display_hrc {
        Some(hrc) => {
            let _ = writeln!(
                out,
                "{} tempered at {}{}: {:.1} HRC{}",
                reading.steel_name,
                reading.temperature,
                symbol,
                hrc,
                if reading.clamped {
                    " (outside published range)"
                } else {
                    ""
                }
            );
        }
        None => {
            let _ = writeln!(out, "{} has no published tempering curve.", reading.steel_name);
        }
    }

    if include_series {
        for point in &reading.series {
            let _ = writeln!(
                out,
                "  {:>6.0}{} -> {:.1} HRC",
                point.temperature, symbol, point.hardness_hrc
            );
        }
    }
    out
}

fn render_catalog(steels: &[&SteelRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} steels", steels.len());
    for steel in steels {
        let metrics = &steel.metrics;
        let _ = writeln!(
            out,
            "  {:<16} {:<20} {:<10} edge {} tough {} corr {} sharpen {}",
            steel.id,
            steel.name,
            steel.producer,
            rating(metrics.edge),
            rating(metrics.toughness),
            rating(metrics.corrosion),
            rating(metrics.sharpen)
        );
    }
    out
}

fn rating(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.0}"))
}
