//! Generation pipeline.
//!
//! Ties the member selector and the interface renderer together: one
//! invocation consumes one class model snapshot and produces one text
//! artifact. Classes are independent, so batches run in parallel.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AutoInterfaceError, Result};
use crate::model::ClassModel;
use crate::renderer::render_interface;
use crate::selector::select_members;

/// Informational notice reported per candidate. Neither blocks anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The class does not carry the configured marker; no artifact.
    MarkerMissing { class: String },
    /// Generation completed for this candidate.
    Completed { class: String, artifact: String },
}

/// One generated text artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub text: String,
}

impl Artifact {
    /// Write the artifact into `dir`, creating it if needed.
    pub fn write<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.text)?;
        Ok(path)
    }
}

/// Outcome of one generation pass over one class.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub notice: Notice,
    pub artifact: Option<Artifact>,
}

/// Stateless pipeline from class models to interface artifacts.
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Deterministic artifact name: `I<ClassName>` plus the configured
    /// suffix.
    pub fn artifact_name(&self, model: &ClassModel) -> String {
        format!("{}{}", model.interface_name(), self.config.artifact_suffix)
    }

    /// Run one full pass over one class model.
    pub fn generate(&self, model: &ClassModel) -> GenerationOutcome {
        if !model.has_marker(&self.config.marker) {
            info!(class = %model.name, marker = %self.config.marker, "no qualifying marker found");
            return GenerationOutcome {
                notice: Notice::MarkerMissing {
                    class: model.name.clone(),
                },
                artifact: None,
            };
        }

        let selection = select_members(model);
        debug!(
            class = %model.name,
            members = selection.members.len(),
            "selected interface members"
        );

        let text = render_interface(model, &selection, &self.config);
        let file_name = self.artifact_name(model);
        info!(class = %model.name, artifact = %file_name, "generation completed");

        GenerationOutcome {
            notice: Notice::Completed {
                class: model.name.clone(),
                artifact: file_name.clone(),
            },
            artifact: Some(Artifact { file_name, text }),
        }
    }

    /// Run generation for a batch of independent classes in parallel.
    ///
    /// Artifact-name uniqueness is an input precondition, checked up front
    /// so no artifact is produced for a colliding batch.
    pub fn generate_all(&self, models: &[ClassModel]) -> Result<Vec<GenerationOutcome>> {
        self.generate_all_with(models, |_| {})
    }

    /// Like [`generate_all`](Self::generate_all), invoking `on_done` as
    /// each class finishes so callers can report batch progress.
    pub fn generate_all_with<F>(
        &self,
        models: &[ClassModel],
        on_done: F,
    ) -> Result<Vec<GenerationOutcome>>
    where
        F: Fn(&GenerationOutcome) + Sync,
    {
        self.check_artifact_collisions(models)?;
        Ok(models
            .par_iter()
            .map(|model| {
                let outcome = self.generate(model);
                on_done(&outcome);
                outcome
            })
            .collect())
    }

    /// Verify the per-class-name uniqueness precondition for a batch.
    pub fn check_artifact_collisions(&self, models: &[ClassModel]) -> Result<()> {
        let mut seen: Vec<String> = Vec::new();
        for model in models {
            let name = self.artifact_name(model);
            if seen.contains(&name) {
                return Err(AutoInterfaceError::DuplicateArtifact(name));
            }
            seen.push(name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, markers: Vec<String>) -> ClassModel {
        ClassModel {
            namespace: vec!["AutomaticInterfaceExample".into()],
            name: name.into(),
            markers,
            doc: None,
            generics: vec![],
            imports: vec![],
            members: vec![],
        }
    }

    #[test]
    fn test_marker_missing_produces_no_artifact() {
        let generator = Generator::new(Config::default());
        let outcome = generator.generate(&model("DemoClass", vec![]));
        assert!(outcome.artifact.is_none());
        assert_eq!(
            outcome.notice,
            Notice::MarkerMissing {
                class: "DemoClass".into()
            }
        );
    }

    #[test]
    fn test_marked_class_produces_named_artifact() {
        let generator = Generator::new(Config::default());
        let outcome = generator.generate(&model(
            "DemoClass",
            vec!["GenerateAutomaticInterface".into()],
        ));
        let artifact = outcome.artifact.expect("artifact");
        assert_eq!(artifact.file_name, "IDemoClass.cs");
        assert!(artifact.text.contains("public partial interface IDemoClass"));
    }

    #[test]
    fn test_duplicate_artifact_names_rejected() {
        let generator = Generator::new(Config::default());
        let models = vec![
            model("DemoClass", vec!["GenerateAutomaticInterface".into()]),
            model("DemoClass", vec!["GenerateAutomaticInterface".into()]),
        ];
        let err = generator.generate_all(&models).unwrap_err();
        assert!(matches!(
            err,
            AutoInterfaceError::DuplicateArtifact(name) if name == "IDemoClass.cs"
        ));
    }

    #[test]
    fn test_batch_reports_each_outcome() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let generator = Generator::new(Config::default());
        let models = vec![
            model("Alpha", vec!["GenerateAutomaticInterface".into()]),
            model("Beta", vec![]),
            model("Gamma", vec!["GenerateAutomaticInterface".into()]),
        ];

        let seen = AtomicUsize::new(0);
        let outcomes = generator
            .generate_all_with(&models, |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(outcomes.len(), 3);
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let generator = Generator::new(Config::default());
        let models = vec![
            model("Alpha", vec!["GenerateAutomaticInterface".into()]),
            model("Beta", vec![]),
            model("Gamma", vec!["GenerateAutomaticInterface".into()]),
        ];
        let outcomes = generator.generate_all(&models).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].artifact.is_some());
        assert!(outcomes[1].artifact.is_none());
        assert!(outcomes[2].artifact.is_some());
    }
}
