use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use appview_core::app::SummaryActor;
use appview_core::domain::{ApplicationSummary, SpaceGuid, Warnings};
use appview_core::impls::{ControlPlaneFixture, InMemoryControlPlane};

/// Show the summary of a deployed application.
#[derive(Parser)]
#[command(name = "appview", version, about, long_about = None)]
struct Cli {
    /// Application name
    app_name: String,

    /// GUID of the space that contains the application
    #[arg(long, env = "APPVIEW_SPACE_GUID")]
    space: String,

    /// JSON snapshot of control plane state to answer requests from
    #[arg(long, env = "APPVIEW_FIXTURE", value_name = "FILE")]
    fixture: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "APPVIEW_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    // (A) fixture から control plane client を用意
    let fixture = load_fixture(&cli.fixture)?;
    let client = Arc::new(InMemoryControlPlane::from_fixture(fixture));
    let actor = SummaryActor::new(client);

    // (B) summary を集約。失敗しても warnings と部分結果は表示する
    let space = SpaceGuid::new(cli.space);
    let result = actor
        .get_application_summary_by_name_and_space(&cli.app_name, &space)
        .await;

    match result {
        Ok(warned) => {
            print_warnings(&warned.warnings);
            render(&warned.value, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            print_warnings(&failure.warnings);
            if failure.partial != ApplicationSummary::default() {
                render(&failure.partial, cli.json)?;
            }
            eprintln!("FAILED: {failure}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn load_fixture(path: &Path) -> Result<ControlPlaneFixture> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    let fixture: ControlPlaneFixture = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse fixture {}", path.display()))?;
    debug!(
        applications = fixture.applications.len(),
        "loaded control plane fixture"
    );
    Ok(fixture)
}

fn print_warnings(warnings: &Warnings) {
    for warning in warnings.iter() {
        eprintln!("{warning}");
    }
}

fn render(summary: &ApplicationSummary, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary).context("Failed to encode summary")?;
        println!("{out}");
    } else {
        print!("{}", format_summary(summary));
    }
    Ok(())
}

fn format_summary(summary: &ApplicationSummary) -> String {
    let app = &summary.application;
    let mut out = String::new();
    let mut field = |label: &str, value: &str| {
        out.push_str(&format!("{:<20}{}\n", format!("{label}:"), value));
    };

    field("name", &app.name);
    field("requested state", &format!("{:?}", app.state).to_lowercase());
    if !summary.isolation_segment.is_empty() {
        field("isolation segment", &summary.isolation_segment);
    }
    field(
        "instances",
        &format!(
            "{}/{}",
            summary.starting_or_running_instance_count(),
            app.instances.unwrap_or(summary.running_instances.len() as u32)
        ),
    );
    field("routes", &summary.route_urls().join(", "));
    field("stack", &summary.stack.name);
    let buildpack = app
        .buildpack
        .as_deref()
        .or(app.detected_buildpack.as_deref())
        .unwrap_or("");
    field("buildpack", buildpack);

    if !summary.running_instances.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "{:<5}{:<10}{:>8}{:>16}{:>16}   {}\n",
            "", "state", "cpu", "memory", "disk", "details"
        ));
        for instance in &summary.running_instances {
            out.push_str(&format!(
                "{:<5}{:<10}{:>7.1}%{:>16}{:>16}   {}\n",
                format!("#{}", instance.id),
                format!("{:?}", instance.state).to_lowercase(),
                instance.cpu * 100.0,
                format!("{} of {}", instance.memory, instance.memory_quota),
                format!("{} of {}", instance.disk, instance.disk_quota),
                instance.details,
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use appview_core::domain::{
        Application, ApplicationInstanceState, ApplicationInstanceWithStats, ApplicationState,
        Route, Stack,
    };

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "appview",
            "some-app",
            "--space",
            "some-space-guid",
            "--fixture",
            "state.json",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.app_name, "some-app");
        assert_eq!(cli.space, "some-space-guid");
        assert!(cli.json);
    }

    #[tokio::test]
    async fn demo_fixture_produces_a_summary() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/started-app.json");
        let fixture = load_fixture(&path).unwrap();
        let actor = SummaryActor::new(Arc::new(InMemoryControlPlane::from_fixture(fixture)));

        let warned = actor
            .get_application_summary_by_name_and_space(
                "billing",
                &SpaceGuid::new("7e2d1c40-88a6-4c36-9b3e-1f0f1c2d3e4f"),
            )
            .await
            .unwrap();

        let summary = warned.value;
        assert_eq!(summary.starting_or_running_instance_count(), 1);
        assert_eq!(summary.isolation_segment, "shared");
        assert_eq!(
            summary.route_urls(),
            vec!["billing.apps.example.com", "billing.apps.example.com/v2"]
        );
        assert_eq!(
            warned.warnings,
            Warnings::from(vec![
                "this api version is deprecated",
                "stack cflinuxfs4 will be deprecated",
            ])
        );
    }

    #[test]
    fn missing_fixture_reports_the_path() {
        let err = load_fixture(&PathBuf::from("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }

    #[test]
    fn text_view_lists_routes_and_instances() {
        let summary = ApplicationSummary {
            application: Application::new("g", "some-app").with_state(ApplicationState::Started),
            running_instances: vec![ApplicationInstanceWithStats {
                id: 0,
                state: ApplicationInstanceState::Running,
                isolation_segment: "iso-1".into(),
                ..ApplicationInstanceWithStats::default()
            }],
            routes: vec![Route::new("r", "host-1")],
            stack: Stack::named("cflinuxfs4"),
            isolation_segment: "iso-1".into(),
        };

        let text = format_summary(&summary);

        assert!(text.contains("requested state:    started"));
        assert!(text.contains("isolation segment:  iso-1"));
        assert!(text.contains("instances:          1/1"));
        assert!(text.contains("routes:             host-1"));
        assert!(text.contains("stack:              cflinuxfs4"));
        assert!(text.contains("#0   running"));
    }
}
