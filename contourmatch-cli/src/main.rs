use clap::Parser;
use contourmatch::{
    estimate_distance, polygon_area, polygon_perimeter, ContourFilter, Detection, FinderConfig,
    FrameConfig, FrameProcessor, OverlapConfig, Point, RawContour, Rect, Template, TemplateBank,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "ContourMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FinderConfigJson {
    min_acf: f64,
    min_icf: f64,
    check_acf: bool,
    check_icf: bool,
    max_rotate_angle_deg: f64,
    max_acf_descriptor_deviation: u32,
    antipattern_name: String,
}

impl Default for FinderConfigJson {
    fn default() -> Self {
        let cfg = FinderConfig::default();
        Self {
            min_acf: cfg.min_acf,
            min_icf: cfg.min_icf,
            check_acf: cfg.check_acf,
            check_icf: cfg.check_icf,
            max_rotate_angle_deg: cfg.max_rotate_angle.to_degrees(),
            max_acf_descriptor_deviation: cfg.max_acf_descriptor_deviation,
            antipattern_name: cfg.antipattern_name,
        }
    }
}

impl From<FinderConfigJson> for FinderConfig {
    fn from(value: FinderConfigJson) -> Self {
        Self {
            min_acf: value.min_acf,
            min_icf: value.min_icf,
            check_acf: value.check_acf,
            check_icf: value.check_icf,
            max_rotate_angle: value.max_rotate_angle_deg.to_radians(),
            max_acf_descriptor_deviation: value.max_acf_descriptor_deviation,
            antipattern_name: value.antipattern_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OverlapConfigJson {
    margin: i32,
    same_shape_ratio: f64,
}

impl Default for OverlapConfigJson {
    fn default() -> Self {
        let cfg = OverlapConfig::default();
        Self {
            margin: cfg.margin,
            same_shape_ratio: cfg.same_shape_ratio,
        }
    }
}

impl From<OverlapConfigJson> for OverlapConfig {
    fn from(value: OverlapConfigJson) -> Self {
        Self {
            margin: value.margin,
            same_shape_ratio: value.same_shape_ratio,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FilterConfigJson {
    enabled: bool,
    min_length: f64,
    min_area: f64,
    min_form_factor: f64,
    frame_size: Option<[u32; 2]>,
}

impl Default for FilterConfigJson {
    fn default() -> Self {
        let cfg = ContourFilter::default();
        Self {
            enabled: cfg.enabled,
            min_length: cfg.min_length,
            min_area: cfg.min_area,
            min_form_factor: cfg.min_form_factor,
            frame_size: cfg.frame_size.map(|(w, h)| [w, h]),
        }
    }
}

impl From<FilterConfigJson> for ContourFilter {
    fn from(value: FilterConfigJson) -> Self {
        Self {
            enabled: value.enabled,
            min_length: value.min_length,
            min_area: value.min_area,
            min_form_factor: value.min_form_factor,
            frame_size: value.frame_size.map(|[w, h]| (w, h)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TemplateJson {
    name: String,
    points: Vec<[i32; 2]>,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    rotation_limit: bool,
}

#[derive(Debug, Deserialize)]
struct ContourJson {
    points: Vec<[i32; 2]>,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    perimeter: Option<f64>,
}

impl From<ContourJson> for RawContour {
    fn from(value: ContourJson) -> Self {
        let points = to_points(&value.points);
        let area = value.area.unwrap_or_else(|| polygon_area(&points));
        let perimeter = value.perimeter.unwrap_or_else(|| polygon_perimeter(&points));
        RawContour::new(points, area, perimeter)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    template_size: usize,
    bank_path: Option<String>,
    templates: Vec<TemplateJson>,
    save_bank_path: Option<String>,
    contours: Vec<ContourJson>,
    finder: FinderConfigJson,
    overlap: OverlapConfigJson,
    filter: FilterConfigJson,
    parallel: bool,
    only_find_contours: bool,
    reference_height: Option<f64>,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_size: TemplateBank::default().template_size(),
            bank_path: None,
            templates: Vec::new(),
            save_bank_path: None,
            contours: Vec::new(),
            finder: FinderConfigJson::default(),
            overlap: OverlapConfigJson::default(),
            filter: FilterConfigJson::default(),
            parallel: false,
            only_find_contours: false,
            reference_height: None,
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    name: String,
    rect: Rect,
    center: Point,
    rate: f64,
    angle_deg: f64,
    scale: f64,
    distance: Option<f64>,
}

impl DetectionRecord {
    fn new(det: Detection, reference_height: Option<f64>) -> Self {
        let distance = reference_height.and_then(|reference| {
            estimate_distance(f64::from(det.bounding_rect.height), reference)
        });
        Self {
            center: det.bounding_rect.center(),
            rect: det.bounding_rect,
            rate: det.rate,
            angle_deg: det.angle_deg(),
            scale: det.scale,
            distance,
            name: det.name,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    samples: usize,
    detections: Vec<DetectionRecord>,
}

fn to_points(raw: &[[i32; 2]]) -> Vec<Point> {
    raw.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

fn load_bank(config: &Config) -> Result<TemplateBank, Box<dyn std::error::Error>> {
    let mut bank = match &config.bank_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TemplateBank::new(config.template_size)?,
    };
    for tpl in &config.templates {
        let points = to_points(&tpl.points);
        let area = tpl.area.unwrap_or_else(|| polygon_area(&points));
        let template = Template::from_points(tpl.name.as_str(), &points, area, bank.template_size())?
            .with_rotation_limit(tpl.rotation_limit);
        bank.push(template)?;
    }
    Ok(bank)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("contourmatch=debug".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.bank_path.is_none() && config.templates.is_empty() {
        return Err("either bank_path or templates must be set in the config".into());
    }

    let bank = load_bank(&config)?;
    if let Some(path) = &config.save_bank_path {
        fs::write(path, serde_json::to_string_pretty(&bank)?)?;
    }

    let Config {
        contours,
        finder,
        overlap,
        filter,
        parallel,
        only_find_contours,
        reference_height,
        output_path,
        ..
    } = config;

    let processor = FrameProcessor::new(FrameConfig {
        finder: finder.into(),
        overlap: overlap.into(),
        filter: filter.into(),
        parallel,
        only_find_contours,
    })?;
    let contours: Vec<RawContour> = contours.into_iter().map(RawContour::from).collect();
    let frame = processor.process_frame(&bank, &contours);

    let output = Output {
        samples: frame.samples.len(),
        detections: frame
            .detections
            .into_iter()
            .map(|det| DetectionRecord::new(det, reference_height))
            .collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
