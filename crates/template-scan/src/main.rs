use template_scan::document::Document;
use template_scan::report;
use tracing_subscriber::EnvFilter;

/// Component file this scanner was written to investigate. An explicit path
/// argument overrides it.
const DEFAULT_TARGET: &str = "src/domains/logs/components/AnalysisPanel.vue";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let doc = match Document::load(&target) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", target, e);
            std::process::exit(1);
        }
    };

    print!("{}", report::scan(&doc).render());
}
