use range_slider::api::{
    InputDispatcher, PointerInput, RangeSlider, RangeSliderConfig, SliderSnapshot,
};
use range_slider::core::{SliderId, TrackBounds, ValueRange, Viewport, format_range_labels};
use range_slider::telemetry::init_default_tracing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: range_slider_replay --input <script.json> [--output <trace.json>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayScript {
    config: RangeSliderConfig,
    values: Vec<ValueRange>,
    viewport: Viewport,
    track: TrackBounds,
    events: Vec<PointerInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayTrace {
    steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayStep {
    event: PointerInput,
    snapshot: SliderSnapshot,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let script: ReplayScript =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let trace = replay(script)?;
    if let Some(output) = args.output {
        write_json(&output, &trace)?;
    }
    Ok(())
}

fn replay(script: ReplayScript) -> Result<ReplayTrace, String> {
    let id = SliderId::new(1);
    let slider = RangeSlider::new(id, script.config).map_err(|err| err.to_string())?;

    let mut dispatcher = InputDispatcher::new();
    dispatcher.register_slider(slider).map_err(|err| err.to_string())?;
    dispatcher.set_viewport(script.viewport);
    dispatcher
        .on_track_layout(id, script.track)
        .map_err(|err| err.to_string())?;

    let mut values = script.values;
    print_values("initial", &values);

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, event) in script.events.into_iter().enumerate() {
        let current = values.clone();
        if let Some(drag) = dispatcher.dispatch(&event, |_| current.as_slice()) {
            dispatcher.commit_drag(drag, &current, |next| values = next);
        }
        print_values(&format!("event {index}"), &values);

        let slider = dispatcher
            .slider(id)
            .ok_or_else(|| "slider vanished during replay".to_owned())?;
        steps.push(ReplayStep {
            snapshot: slider.snapshot(&values, dispatcher.drag_phase()),
            event,
        });
    }

    Ok(ReplayTrace { steps })
}

fn print_values(label: &str, values: &[ValueRange]) {
    println!("{label}:");
    for line in format_range_labels(values) {
        println!("  {line}");
    }
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
    })
}
