//! The pre-trained rating regressor: a TorchScript artifact plus a
//! meta.json declaring the authoritative feature order.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use tch::{kind::Kind, CModule, Device, Tensor};

#[derive(Deserialize)]
struct MetaJson {
    feat_list: Vec<String>,
    in_dim: Option<usize>,
}

pub struct Model {
    model: CModule,
    device: Device,
    in_dim: usize,
}

impl Model {
    /// Load the artifact and its meta, probe the output shape with a dummy
    /// forward, and return the model together with the declared feature
    /// list.
    pub fn new(model_path: &str, meta_path: &str) -> Result<(Self, Vec<String>)> {
        let device = Device::Cpu;

        let meta_txt = fs::read_to_string(Path::new(meta_path))
            .with_context(|| format!("failed to read meta at {}", meta_path))?;
        let meta: MetaJson =
            serde_json::from_str(&meta_txt).with_context(|| "failed to parse meta.json")?;

        let feat_list = meta.feat_list;
        let in_dim = meta.in_dim.unwrap_or(feat_list.len());

        let model = CModule::load_on_device(model_path, device)
            .with_context(|| format!("failed to load TorchScript {}", model_path))?;

        // Probe with a dummy forward; a rating regressor must produce one
        // scalar per input row.
        let dummy = Tensor::zeros([1, in_dim as i64], (Kind::Float, device));
        let out = model.forward_ts(&[dummy])?;
        let sz = out.size();
        if !matches!(sz.as_slice(), [1] | [1, 1]) {
            bail!("unexpected model output size: {:?}", sz);
        }

        Ok((
            Self {
                model,
                device,
                in_dim,
            },
            feat_list,
        ))
    }

    /// Predicted rating for one ordered feature vector.
    pub fn predict(&self, x: &[f32]) -> Result<f64> {
        if x.len() != self.in_dim {
            bail!(
                "feature length mismatch: got {}, expected {}",
                x.len(),
                self.in_dim
            );
        }

        let input = Tensor::from_slice(x)
            .reshape([1, self.in_dim as i64])
            .to_device(self.device);

        let out = self.model.forward_ts(&[input])?;
        let rating = match out.size().as_slice() {
            [1] => out.double_value(&[0]),
            [1, 1] => out.double_value(&[0, 0]),
            sz => bail!("unexpected prediction shape: {:?}", sz),
        };
        Ok(rating)
    }
}
