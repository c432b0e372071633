#![cfg(feature = "backend-tract")]

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tract_onnx::prelude::*;

use crate::config::FilterConfig;
use crate::detect::backend::DetectorBackend;
use crate::detect::labels::Label;
use crate::detect::result::Detection;
use crate::error::FilterError;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Tract-based backend running the NudeNet ONNX detector.
///
/// Loads a local model file and performs inference on RGB frames. The
/// model file is the only disk access; there is no network I/O.
pub struct TractBackend {
    model: Plan,
    input_size: u32,
    score_floor: f32,
    iou_threshold: f32,
}

/// Model input prepared from one frame, with the letterbox geometry
/// needed to map boxes back to original-image pixels.
struct PreparedInput {
    tensor: Tensor,
    resize_factor: f32,
    pad_top: u32,
    pad_left: u32,
}

impl TractBackend {
    /// Load the ONNX model and prepare it for inference.
    ///
    /// This is the one-time per-process initialization; a missing or
    /// unloadable model surfaces as [`FilterError::DependencyMissing`]
    /// here and nowhere earlier.
    pub fn new(config: &FilterConfig) -> Result<Self, FilterError> {
        let model_path = config.model_path.as_path();
        if !model_path.exists() {
            return Err(FilterError::DependencyMissing(format!(
                "model file not found at {}",
                model_path.display()
            )));
        }

        let model = load_model(model_path, config.input_size as usize)
            .map_err(|e| FilterError::DependencyMissing(format!("{e:#}")))?;

        log::info!(
            "nudity detector initialized from {} (input {}x{})",
            model_path.display(),
            config.input_size,
            config.input_size
        );

        Ok(Self {
            model,
            input_size: config.input_size,
            score_floor: config.score_floor,
            iou_threshold: config.iou_threshold,
        })
    }

    fn post_process(
        &self,
        outputs: TVec<TValue>,
        resize_factor: f32,
        pad_top: u32,
        pad_left: u32,
    ) -> Result<Vec<Detection>> {
        let output = outputs
            .first()
            .ok_or_else(|| anyhow!("model produced no outputs"))?;
        let view = output
            .to_array_view::<f32>()
            .context("model output tensor was not f32")?;
        let shape = view.shape().to_vec();
        if shape.len() != 3 || shape[0] != 1 || shape[1] < 5 {
            return Err(anyhow!(
                "unexpected model output shape {:?}; expected [1, 4 + classes, anchors]",
                shape
            ));
        }

        // [1, 4 + classes, anchors] -> [anchors, 4 + classes]
        let mut data = view.remove_axis(tract_ndarray::Axis(0));
        data.swap_axes(0, 1);

        let mut candidates = Vec::new();
        for row in data.rows() {
            let class_scores = row.slice(tract_ndarray::s![4..]);
            let mut best_idx = 0usize;
            let mut best_score = f32::NEG_INFINITY;
            for (idx, score) in class_scores.iter().enumerate() {
                if *score > best_score {
                    best_idx = idx;
                    best_score = *score;
                }
            }
            if best_score < self.score_floor {
                continue;
            }

            let label = Label::try_from(best_idx)
                .map_err(|idx| anyhow!("model reported unknown class index {}", idx))?;

            // Box center/size in letterbox space -> original-image pixels.
            let (cx, cy, w, h) = (row[0], row[1], row[2], row[3]);
            candidates.push(Detection {
                label,
                confidence: best_score,
                x: (cx - w * 0.5 - pad_left as f32) * resize_factor,
                y: (cy - h * 0.5 - pad_top as f32) * resize_factor,
                w: w * resize_factor,
                h: h * resize_factor,
            });
        }

        Ok(nms(candidates, self.iou_threshold))
    }
}

impl DetectorBackend for TractBackend {
    fn name(&self) -> &'static str {
        "tract"
    }

    fn detect(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, FilterError> {
        let input = letterbox(pixels, width, height, self.input_size)
            .map_err(FilterError::Detection)?;
        let outputs = self
            .model
            .run(tvec!(input.tensor.into()))
            .context("ONNX inference failed")
            .map_err(FilterError::Detection)?;
        let detections = self
            .post_process(outputs, input.resize_factor, input.pad_top, input.pad_left)
            .map_err(FilterError::Detection)?;

        log::debug!("detector returned {} detections", detections.len());
        Ok(detections)
    }
}

fn load_model(path: &Path, size: usize) -> Result<Plan> {
    tract_onnx::onnx()
        .model_for_path(path)
        .with_context(|| format!("failed to load ONNX model from {}", path.display()))?
        .with_input_fact(
            0,
            InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 3, size, size)),
        )
        .context("failed to set input fact")?
        .into_optimized()
        .context("failed to optimize ONNX model")?
        .into_runnable()
        .context("failed to build runnable ONNX model")
}

/// Resize a frame into `size`x`size` with aspect preserved and centered
/// black padding, producing the NCHW input tensor plus the geometry to
/// undo the mapping.
fn letterbox(pixels: &[u8], width: u32, height: u32, size: u32) -> Result<PreparedInput> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| anyhow!("frame dimensions overflow"))?;
    if pixels.len() != expected {
        return Err(anyhow!(
            "expected {} RGB bytes, received {}",
            expected,
            pixels.len()
        ));
    }

    let frame = image::RgbImage::from_raw(width, height, pixels.to_vec())
        .ok_or_else(|| anyhow!("frame buffer rejected by image layer"))?;
    let resized = image::DynamicImage::ImageRgb8(frame)
        .resize(size, size, image::imageops::FilterType::Triangle)
        .into_rgb8();

    let resize_factor = (((width as f32).powi(2) + (height as f32).powi(2))
        / ((resized.width() as f32).powi(2) + (resized.height() as f32).powi(2)))
    .sqrt();

    let pad_left = (size - resized.width()) / 2;
    let pad_top = (size - resized.height()) / 2;

    let black = image::Rgb([0u8, 0, 0]);
    let canvas = image::ImageBuffer::from_fn(size, size, |x, y| {
        if x >= pad_left
            && x < resized.width() + pad_left
            && y >= pad_top
            && y < resized.height() + pad_top
        {
            *resized.get_pixel(x - pad_left, y - pad_top)
        } else {
            black
        }
    });

    let side = size as usize;
    let tensor: Tensor = tract_ndarray::Array4::from_shape_fn((1, 3, side, side), |(_, c, y, x)| {
        canvas[(x as u32, y as u32)][c] as f32 / 255.0
    })
    .into();

    Ok(PreparedInput {
        tensor,
        resize_factor,
        pad_top,
        pad_left,
    })
}

/// Greedy class-agnostic IoU suppression, highest confidence first.
fn nms(mut detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    detections.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    let mut kept: Vec<Detection> = Vec::with_capacity(detections.len());
    for det in detections {
        if kept.iter().all(|k| iou(k, &det) <= iou_threshold) {
            kept.push(det);
        }
    }
    kept
}

fn iou(a: &Detection, b: &Detection) -> f32 {
    let x1 = a.x.max(b.x);
    let y1 = a.y.max(b.y);
    let x2 = (a.x + a.w).min(b.x + b.w);
    let y2 = (a.y + a.h).min(b.y + b.h);
    let inter = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
    let union = a.w * a.h + b.w * b.h - inter;
    if union <= 0.0 {
        0.0
    } else {
        inter / union
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(label: Label, confidence: f32, x: f32, y: f32, w: f32, h: f32) -> Detection {
        Detection {
            label,
            confidence,
            x,
            y,
            w,
            h,
        }
    }

    #[test]
    fn iou_of_identical_boxes_is_one() {
        let a = boxed(Label::FaceF, 0.9, 10.0, 10.0, 20.0, 20.0);
        assert!((iou(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iou_of_disjoint_boxes_is_zero() {
        let a = boxed(Label::FaceF, 0.9, 0.0, 0.0, 10.0, 10.0);
        let b = boxed(Label::FaceM, 0.8, 100.0, 100.0, 10.0, 10.0);
        assert_eq!(iou(&a, &b), 0.0);
    }

    #[test]
    fn nms_suppresses_overlapping_lower_confidence() {
        let strong = boxed(Label::ExposedBreastF, 0.9, 10.0, 10.0, 20.0, 20.0);
        let weak = boxed(Label::ExposedBreastF, 0.4, 11.0, 11.0, 20.0, 20.0);
        let far = boxed(Label::FaceF, 0.5, 200.0, 200.0, 20.0, 20.0);

        let kept = nms(vec![weak, far.clone(), strong.clone()], 0.45);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], strong);
        assert_eq!(kept[1], far);
    }

    #[test]
    fn letterbox_produces_square_tensor_with_centered_padding() -> Result<()> {
        // 4x2 all-white frame into an 8x8 canvas: 8x4 content, 2px top pad.
        let pixels = vec![255u8; 4 * 2 * 3];
        let input = letterbox(&pixels, 4, 2, 8)?;

        assert_eq!(input.tensor.shape(), &[1, 3, 8, 8]);
        assert_eq!(input.pad_left, 0);
        assert_eq!(input.pad_top, 2);
        assert!((input.resize_factor - 0.5).abs() < 1e-6);

        let view = input.tensor.to_array_view::<f32>()?;
        // Padding row stays black, content row is white.
        assert_eq!(view[[0, 0, 0, 0]], 0.0);
        assert_eq!(view[[0, 0, 4, 4]], 1.0);
        Ok(())
    }

    #[test]
    fn letterbox_rejects_wrong_buffer_length() {
        assert!(letterbox(&[0u8; 5], 4, 2, 8).is_err());
    }
}
