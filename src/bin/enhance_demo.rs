use std::env;
use std::path::Path;
use tone_enhancer::config::{load_config, OutputConfig};
use tone_enhancer::diagnostics::EnhanceTrace;
use tone_enhancer::enhance::EnhanceOutcome;
use tone_enhancer::image::io::{
    load_image, save_grayscale_f32, save_grayscale_u8, save_montage_u8, write_json_file,
};
use tone_enhancer::{EnhanceParams, Enhancer};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    print_banner(
        config
            .title
            .as_deref()
            .unwrap_or("Histogram Equalization & Contrast Stretching"),
    );

    let image = load_image(&config.input_path)?;
    let enhancer = Enhancer::new(EnhanceParams {
        contrast_level: config.contrast_level,
        enable_stretch: true,
    });
    let outcome = enhancer.process(&image).map_err(|e| e.to_string())?;

    print_summary(&outcome.trace);
    save_artifacts(&config.output, &outcome)?;

    println!("{}", "=".repeat(100));
    Ok(())
}

fn usage() -> String {
    "Usage: enhance_demo <config.json>".to_string()
}

fn print_banner(title: &str) {
    println!("{}", "=".repeat(100));
    println!("{}", title.to_uppercase());
    println!("{}", "-".repeat(100));
}

fn print_summary(trace: &EnhanceTrace) {
    println!("Enhancement summary");
    println!(
        "  input: {}x{} ({} channels)",
        trace.input.width, trace.input.height, trace.input.channels
    );
    println!(
        "  histogram: {} populated bins, cdf range [{}, {}]",
        trace.histogram.populated_bins, trace.histogram.cdf_min, trace.histogram.cdf_max
    );
    println!(
        "  lut: 0 -> {}, 255 -> {}",
        trace.histogram.lut[0], trace.histogram.lut[255]
    );
    if let Some(stretch) = &trace.stretch {
        println!(
            "  stretch: level={} clipped_high={} clipped_low={}",
            stretch.contrast_level, stretch.clipped_high, stretch.clipped_low
        );
    }

    let stages: Vec<String> = trace
        .timings
        .iter()
        .map(|t| format!("{}={:.3}", t.label, t.elapsed_ms))
        .collect();
    println!(
        "  timings (ms): {} total={:.3}",
        stages.join(" "),
        trace.total_ms
    );
}

fn save_artifacts(output: &OutputConfig, outcome: &EnhanceOutcome) -> Result<(), String> {
    if let Some(path) = &output.gray_image {
        save_grayscale_f32(&outcome.gray, path)?;
        println!("Grayscale image written to {}", path.display());
    }
    if let Some(path) = &output.equalized_image {
        save_grayscale_u8(&outcome.equalized, path)?;
        println!("Equalized image written to {}", path.display());
    }
    if let Some(path) = &output.stretched_image {
        if let Some(stretched) = &outcome.stretched {
            save_grayscale_u8(stretched, path)?;
            println!("Stretched image written to {}", path.display());
        }
    }
    if let Some(path) = &output.montage_image {
        let gray_u8 = outcome.gray.to_u8();
        let mut panels = vec![&gray_u8, &outcome.equalized];
        if let Some(stretched) = &outcome.stretched {
            panels.push(stretched);
        }
        save_montage_u8(&panels, path)?;
        println!("Montage written to {}", path.display());
    }
    if let Some(path) = &output.report_json {
        write_json_file(path, &outcome.trace)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}
