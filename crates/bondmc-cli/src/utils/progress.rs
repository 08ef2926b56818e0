use bondmc::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 100;
const BAR_TEMPLATE: &str = "{msg:<12} [{bar:40.green/white}] {pos}/{len} sweeps ({per_sec}, {eta})";

/// Renders engine progress events as a single spinner-or-bar line on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        pb.finish_and_clear();
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = Arc::clone(&self.pb);

        Box::new(move |event: Progress| {
            let Ok(mut bar) = pb.lock() else {
                warn!("Progress bar mutex was poisoned; dropping progress event.");
                return;
            };
            apply_event(&mut bar, event);
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_event(bar: &mut ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_length(0);
            bar.set_style(spinner_style());
            bar.set_message(name);
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Progress::TaskStart { total_steps } => {
            bar.disable_steady_tick();
            bar.reset();
            bar.set_length(total_steps);
            bar.set_style(bar_style());
        }
        Progress::TaskIncrement => bar.inc(1),
        Progress::TaskFinish => {
            let len = bar.length().unwrap_or(0);
            if bar.position() < len {
                bar.set_position(len);
            }
            bar.finish();
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message("done");
        }
        Progress::Message(msg) => {
            if bar.is_finished() {
                bar.set_message(msg);
            } else {
                bar.println(format!("  {}", msg));
            }
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    match ProgressStyle::with_template(BAR_TEMPLATE) {
        Ok(style) => style
            .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            })
            .progress_chars("=> "),
        Err(_) => ProgressStyle::default_bar(),
    }
}
