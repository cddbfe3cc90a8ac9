use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, HttpLessonApi, InMemoryLessonApi, LessonFlowService};
use tracing::info;
use ui::{App, DesktopPronouncer, PronouncerRef, UiApp, build_app_context};
use vocab_core::model::UnitId;

mod demo;
mod logging;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUnitId { raw: String },
    InvalidTimeout { raw: String },
    InvalidApiBase { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUnitId { raw } => write!(f, "invalid --unit value: {raw:?}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidApiBase { raw } => write!(f, "invalid --api-base value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    lesson_flow: Arc<LessonFlowService>,
    pronouncer: PronouncerRef,
    default_unit: Option<UnitId>,
}

impl UiApp for DesktopApp {
    fn lesson_flow(&self) -> Arc<LessonFlowService> {
        Arc::clone(&self.lesson_flow)
    }

    fn pronouncer(&self) -> PronouncerRef {
        Arc::clone(&self.pronouncer)
    }

    fn default_unit(&self) -> Option<UnitId> {
        self.default_unit.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Help,
    Run(Args),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api: ApiConfig,
    unit: Option<UnitId>,
    demo: bool,
}

fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(
        out,
        "  cargo run -p app -- [--api-base <url>] [--unit <id>] [--timeout-secs <n>] [--demo]"
    )?;
    writeln!(out)?;
    writeln!(out, "Defaults:")?;
    writeln!(out, "  --api-base {}", services::DEFAULT_API_BASE_URL)?;
    writeln!(out, "  --timeout-secs {}", services::DEFAULT_TIMEOUT_SECS)?;
    writeln!(out)?;
    writeln!(out, "--demo serves a built-in lesson without contacting a backend.")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(
        out,
        "  VOCAB_API_BASE_URL, VOCAB_UNIT_ID, VOCAB_API_TIMEOUT_SECS, VOCAB_LOG"
    )
}

fn print_usage() {
    let _ = write_usage(&mut io::stderr().lock());
}

#[derive(Debug)]
enum RunError {
    Usage(ArgsError),
    Startup(Box<dyn std::error::Error>),
}

impl From<ArgsError> for RunError {
    fn from(err: ArgsError) -> Self {
        RunError::Usage(err)
    }
}

/// The single place a failed run is reported. Usage errors are followed by the usage text.
fn report(err: &RunError, out: &mut impl Write) -> io::Result<()> {
    match err {
        RunError::Usage(err) => {
            writeln!(out, "{err}")?;
            write_usage(out)
        }
        RunError::Startup(err) => writeln!(out, "{err}"),
    }
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut api = ApiConfig::from_lookup(&lookup);
        let mut unit = lookup("VOCAB_UNIT_ID").and_then(|raw| UnitId::new(raw).ok());
        let mut demo = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-base" => {
                    let value = require_value(&mut args, "--api-base")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiBase { raw: value });
                    }
                    api.base_url = value.trim().to_string();
                }
                "--unit" => {
                    let value = require_value(&mut args, "--unit")?;
                    let parsed = UnitId::new(value.clone())
                        .map_err(|_| ArgsError::InvalidUnitId { raw: value })?;
                    unit = Some(parsed);
                }
                "--timeout-secs" => {
                    let value = require_value(&mut args, "--timeout-secs")?;
                    let secs = value
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    api.timeout = Duration::from_secs(secs);
                }
                "--demo" => demo = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { api, unit, demo }))
    }
}

type FlowSetup = (Arc<LessonFlowService>, Option<UnitId>);

fn build_flow(args: &Args) -> Result<FlowSetup, Box<dyn std::error::Error>> {
    if args.demo {
        let (demo_unit, lesson) = demo::demo_lesson()?;
        let backend = Arc::new(InMemoryLessonApi::new().with_lesson(demo_unit.clone(), lesson));
        info!(unit = %demo_unit, "serving built-in demo lesson");
        let unit = args.unit.clone().or(Some(demo_unit));
        return Ok((Arc::new(LessonFlowService::with_backend(backend)), unit));
    }

    let backend = Arc::new(HttpLessonApi::new(&args.api)?);
    info!(
        base_url = %args.api.base_url,
        timeout_secs = args.api.timeout.as_secs(),
        "using lesson backend"
    );
    Ok((
        Arc::new(LessonFlowService::with_backend(backend)),
        args.unit.clone(),
    ))
}

async fn run() -> Result<(), RunError> {
    logging::init_tracing(std::env::var("VOCAB_LOG").ok().as_deref());

    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    let (lesson_flow, default_unit) = build_flow(&args).map_err(RunError::Startup)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        lesson_flow,
        pronouncer: Arc::new(DesktopPronouncer),
        default_unit,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("VocabMaster")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        let _ = report(&err, &mut io::stderr().lock());
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, ArgsError> {
        Args::parse(args.iter().map(|a| a.to_string()), |_| None)
    }

    fn run_args(args: &[&str]) -> Args {
        match parse(args).unwrap() {
            Parsed::Run(args) => args,
            Parsed::Help => panic!("expected run args"),
        }
    }

    #[test]
    fn defaults_without_flags() {
        let args = run_args(&[]);
        assert_eq!(args.api, ApiConfig::default());
        assert_eq!(args.unit, None);
        assert!(!args.demo);
    }

    #[test]
    fn flags_override_environment() {
        let parsed = Args::parse(
            ["--unit", "u9", "--api-base", "http://api.test", "--timeout-secs", "7"]
                .iter()
                .map(|a| a.to_string()),
            |key| match key {
                "VOCAB_UNIT_ID" => Some("u1".into()),
                "VOCAB_API_BASE_URL" => Some("http://env.test".into()),
                _ => None,
            },
        )
        .unwrap();
        let Parsed::Run(args) = parsed else {
            panic!("expected run args");
        };
        assert_eq!(args.unit, Some(UnitId::new("u9").unwrap()));
        assert_eq!(args.api.base_url, "http://api.test");
        assert_eq!(args.api.timeout, Duration::from_secs(7));
    }

    #[test]
    fn environment_unit_is_used() {
        let parsed = Args::parse(std::iter::empty(), |key| {
            (key == "VOCAB_UNIT_ID").then(|| "u1".to_string())
        })
        .unwrap();
        let Parsed::Run(args) = parsed else {
            panic!("expected run args");
        };
        assert_eq!(args.unit, Some(UnitId::new("u1").unwrap()));
    }

    #[test]
    fn usage_errors() {
        assert_eq!(
            parse(&["--unit"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--unit" }
        );
        assert_eq!(
            parse(&["--unit", "  "]).unwrap_err(),
            ArgsError::InvalidUnitId { raw: "  ".into() }
        );
        assert_eq!(
            parse(&["--timeout-secs", "0"]).unwrap_err(),
            ArgsError::InvalidTimeout { raw: "0".into() }
        );
        assert_eq!(
            parse(&["--verbose"]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert_eq!(parse(&["-h"]).unwrap(), Parsed::Help);
    }

    #[test]
    fn demo_flow_defaults_to_demo_unit() {
        let args = run_args(&["--demo"]);
        let (_, unit) = build_flow(&args).unwrap();
        assert_eq!(unit.map(|u| u.as_str().to_string()), Some(demo::DEMO_UNIT_ID.to_string()));
    }

    #[test]
    fn usage_error_is_reported_once() {
        let err = RunError::from(parse(&["--verbose"]).unwrap_err());
        let mut out = Vec::new();
        report(&err, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("unknown argument: --verbose").count(), 1);
        assert!(text.contains("Usage:"));
    }

    #[test]
    fn startup_error_skips_usage() {
        let err = RunError::Startup(Box::new(ArgsError::InvalidApiBase { raw: "x".into() }));
        let mut out = Vec::new();
        report(&err, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("invalid --api-base value").count(), 1);
        assert!(!text.contains("Usage:"));
    }
}
