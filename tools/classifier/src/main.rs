/// Land-cover classification CLI: runs the feature pipeline and the trained
/// ONNX classifier on one satellite image, optionally writing the annotated
/// map document for the predicted class.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use landcover_core::classifier::Classifier;
use landcover_core::features::extract;
use landcover_core::geo::annotate;
use landcover_core::map::{MapDocument, MAP_FILE};
use landcover_core::onnx::{OnnxModel, MODEL_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "classifier",
    about = "Classify a satellite image into a land-cover class"
)]
struct Args {
    /// Satellite image to classify (any raster format the decoder supports).
    image: PathBuf,

    /// Trained classifier artifact.
    #[arg(long, default_value = MODEL_FILE)]
    model: PathBuf,

    /// Also write the map document (map.html) with the class landmark.
    #[arg(long)]
    map: bool,

    /// Print the result as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tensor = extract(&args.image)
        .with_context(|| format!("extracting features from {}", args.image.display()))?;

    let model = OnnxModel::load(&args.model)
        .with_context(|| format!("loading classifier model {}", args.model.display()))?;
    let classifier = Classifier::new(model);

    let label = classifier.classify(&tensor).context("classifying image")?;

    if args.json {
        println!("{}", serde_json::json!({ "label": label }));
    } else {
        println!("Prediction: {label}");
    }

    if args.map {
        let document = MapDocument::new(annotate(label));
        fs::write(MAP_FILE, document.render()).with_context(|| format!("writing {MAP_FILE}"))?;
        eprintln!("Map written to {MAP_FILE}");
    }

    Ok(())
}
