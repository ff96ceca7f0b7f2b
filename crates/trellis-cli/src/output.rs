use serde::Serialize;
use trellis_sync::DragOutcome;

/// Envelope wrapped around every command result: one line of JSON on stdout
/// for results, stderr for failures, so scripts can pipe the client without
/// scraping logs.
#[derive(Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            api_version: env!("CARGO_PKG_VERSION"),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    fn failed(message: &str) -> Self {
        Self {
            success: false,
            api_version: env!("CARGO_PKG_VERSION"),
            data: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Serialize)]
struct Listing<T: Serialize> {
    items: Vec<T>,
    count: usize,
}

pub fn output_success<T: Serialize>(data: T) {
    println!("{}", serde_json::to_string(&Envelope::ok(data)).unwrap());
}

/// Wrap a collection with its count before printing it.
pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(Listing { items, count });
}

/// Print an error envelope to stderr and terminate with exit code 1.
///
/// Returns the never type because no caller has anything left to do once a
/// failure is reported; shell scripts and CI see the non-zero exit.
pub fn output_error(message: &str) -> ! {
    let envelope = Envelope::failed(message);
    eprintln!("{}", serde_json::to_string(&envelope).unwrap());
    std::process::exit(1);
}

/// JSON fragment describing how a reorder ended up persisted.
pub fn reorder_summary(outcome: DragOutcome) -> serde_json::Value {
    match outcome {
        DragOutcome::Noop => serde_json::json!({ "outcome": "noop" }),
        DragOutcome::Synced { updated } => {
            serde_json::json!({ "outcome": "synced", "updated": updated })
        }
        DragOutcome::Reconciled => serde_json::json!({ "outcome": "reconciled" }),
    }
}
