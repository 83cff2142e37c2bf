/*!
 * Reference training configuration.
 *
 * The template shows the sections the orchestrator expects: the model,
 * the `train` block with its dataset, and the `sweeper` block driving the
 * hyperparameter search.
 */

use anyhow::{anyhow, Result};
use log::info;
use std::path::Path;

use crate::file_utils::FileManager;

/// Template for a classification training job with a hyperparameter sweep
pub const TRAINING_TEMPLATE: &str = r#"debug: wisrovi
model: "yolov8n-cls.pt"

# Data Configuration
train:
  data: /datasets/clasificacion/colorball.v8i.multiclass/
  epochs: 20
  imgsz: 640

# Hyperparameter Optimization
sweeper:
  version: 2
  study_name: "example_classification"
  fitness: "metrics/accuracy_top1"
  n_trials: 5
  search_space:
    model: ["choice", "yolov8n-cls.pt"]
    train:
      imgsz: ["choice", 416, 512, 640]
      lr0: ["loguniform", 1e-5, 1e-2]

metadata:
  content: "Image classification v1"
  author: "William Rodriguez"
"#;

/// Write the template to `output`, refusing to replace an existing file
/// unless `force_overwrite` is set
pub fn write_template(output: &Path, force_overwrite: bool) -> Result<()> {
    if output.exists() && !force_overwrite {
        return Err(anyhow!(
            "Output file already exists: {:?}. Use -f to force overwrite.",
            output
        ));
    }

    FileManager::write_to_file(output, TRAINING_TEMPLATE)?;
    info!("Template written to {:?}", output);
    Ok(())
}
