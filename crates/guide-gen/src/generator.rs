//! The Generator - orchestrates load, resolution, emission, and writing

use crate::diff::unified_diff;
use crate::error::Result;
use crate::state::GenState;
use guide_emit::{
    EditorRegistry, EmitInput, FileArtifact, FileMode, SkippedCategory,
    adapter::skipped_categories,
};
use guide_fs::{NormalizedPath, io};
use guide_schema::{
    Configuration, Error as ModelError, VariableMap, load_configuration, resolve_blocks,
    resolve_commands, resolve_external_tools, resolve_variables, scan_missing,
};
use std::collections::BTreeMap;

/// Options for one generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Stop after validation; report diagnostics only.
    pub validate_only: bool,
    /// Emit and diff, but write nothing.
    pub dry_run: bool,
}

/// One generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Path to the guidance document
    pub source: NormalizedPath,
    /// Root directory artifacts are written under
    pub output_root: NormalizedPath,
    /// Requested editor slugs; empty means every registered editor
    pub editors: Vec<String>,
    /// `NAME=value` overrides, already parsed
    pub overrides: Vec<(String, String)>,
    /// Environment-derived variable source
    pub environment: BTreeMap<String, String>,
    pub options: GenerateOptions,
}

impl GenerateRequest {
    pub fn new(source: impl Into<NormalizedPath>, output_root: impl Into<NormalizedPath>) -> Self {
        Self {
            source: source.into(),
            output_root: output_root.into(),
            editors: Vec::new(),
            overrides: Vec::new(),
            environment: BTreeMap::new(),
            options: GenerateOptions::default(),
        }
    }
}

/// An artifact plus its dry-run diff against any pre-existing file.
#[derive(Debug, Clone)]
pub struct ArtifactPreview {
    pub artifact: FileArtifact,
    /// Unified diff, or `None` when the file already matches
    pub diff: Option<String>,
}

/// What happened for one editor.
#[derive(Debug, Clone)]
pub enum EditorStatus {
    /// Artifacts written; write errors, if any, are scoped per artifact.
    Written {
        paths: Vec<String>,
        write_errors: Vec<String>,
    },
    /// Dry run: artifacts computed, nothing touched.
    Previewed { previews: Vec<ArtifactPreview> },
    /// The adapter failed; other editors were still processed.
    Failed { message: String },
}

/// Per-editor result entry.
#[derive(Debug, Clone)]
pub struct EditorOutcome {
    pub slug: String,
    pub status: EditorStatus,
    /// Content categories the adapter declined to emit
    pub skipped: Vec<SkippedCategory>,
}

impl EditorOutcome {
    pub fn succeeded(&self) -> bool {
        match &self.status {
            EditorStatus::Written { write_errors, .. } => write_errors.is_empty(),
            EditorStatus::Previewed { .. } => true,
            EditorStatus::Failed { .. } => false,
        }
    }
}

/// The structured result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Final pipeline state
    pub state: GenState,
    /// Per-editor outcomes, in request order
    pub editors: Vec<EditorOutcome>,
}

impl GenerationReport {
    /// True when every requested editor succeeded.
    ///
    /// Capability skips are warnings, not failures.
    pub fn success(&self) -> bool {
        self.editors.iter().all(EditorOutcome::succeeded)
    }
}

/// Orchestrates the generation pipeline over the fixed editor catalog.
pub struct Generator {
    registry: EditorRegistry,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            registry: EditorRegistry::with_builtins(),
        }
    }

    /// Build a generator over a custom registry.
    pub fn with_registry(registry: EditorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EditorRegistry {
        &self.registry
    }

    /// Run the pipeline.
    ///
    /// Returns `Err` only for fatal model errors (parse, schema, variable);
    /// adapter and write failures land in the per-editor outcomes.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerationReport> {
        let config = load_configuration(&request.source).map_err(|e| {
            tracing::warn!(state = %GenState::Failed, error = %e, "document failed to load");
            e
        })?;
        tracing::debug!(state = %GenState::Loaded, source = %request.source, "loaded document");
        tracing::debug!(state = %GenState::Validated, documents = config.documents.len(), "schema validated");

        let vars = resolve_variables(&config.variables, &request.overrides, &request.environment);

        let missing = scan_missing(&config, &vars);
        if !missing.is_empty() {
            tracing::warn!(state = %GenState::Failed, issues = missing.len(), "undefined variables");
            return Err(ModelError::Variable(missing).into());
        }
        tracing::debug!(state = %GenState::VariablesResolved, variables = vars.len(), "variables resolved");

        // Duplicate document names surface here, before any editor work.
        let blocks = resolve_blocks(&config, &vars).map_err(|issues| {
            tracing::warn!(state = %GenState::Failed, issues = issues.len(), "document resolution failed");
            ModelError::Schema(issues)
        })?;

        if request.options.validate_only {
            return Ok(GenerationReport {
                state: GenState::Validated,
                editors: Vec::new(),
            });
        }

        let commands = resolve_commands(&config.commands, &vars);
        let external_tools = resolve_external_tools(&config.external_tools, &vars);
        tracing::debug!(state = %GenState::DocumentsResolved, blocks = blocks.len(), "resolution complete");

        let input = EmitInput {
            blocks: &blocks,
            commands: &commands,
            external_tools: &external_tools,
            variables: &vars,
        };

        let requested = self.requested_editors(request);
        let mut outcomes = Vec::with_capacity(requested.len());

        for slug in requested {
            outcomes.push(self.run_editor(&slug, &input, request));
        }

        let state = if request.options.dry_run {
            GenState::Emitted
        } else {
            GenState::Written
        };

        Ok(GenerationReport {
            state,
            editors: outcomes,
        })
    }

    /// Convenience wrapper for validate-only runs.
    pub fn validate(
        &self,
        source: &NormalizedPath,
        overrides: &[(String, String)],
        environment: &BTreeMap<String, String>,
    ) -> Result<Configuration> {
        let config = load_configuration(source)?;
        let vars = resolve_variables(&config.variables, overrides, environment);

        let missing = scan_missing(&config, &vars);
        if !missing.is_empty() {
            return Err(ModelError::Variable(missing).into());
        }

        resolve_blocks(&config, &vars).map_err(ModelError::Schema)?;
        Ok(config)
    }

    fn requested_editors(&self, request: &GenerateRequest) -> Vec<String> {
        if request.editors.is_empty() {
            self.registry.list().iter().map(|s| s.to_string()).collect()
        } else {
            request.editors.clone()
        }
    }

    /// Emit and (unless dry-run) write for one editor. Failures here never
    /// propagate; they become the editor's outcome.
    fn run_editor(
        &self,
        slug: &str,
        input: &EmitInput<'_>,
        request: &GenerateRequest,
    ) -> EditorOutcome {
        let Some(registration) = self.registry.get(slug) else {
            return EditorOutcome {
                slug: slug.to_string(),
                status: EditorStatus::Failed {
                    message: format!("unknown editor {slug:?}"),
                },
                skipped: Vec::new(),
            };
        };

        let skipped = skipped_categories(registration.capabilities(), input);
        for category in &skipped {
            tracing::info!(editor = slug, %category, "adapter does not emit category, skipping");
        }

        let artifacts = match registration.adapter.emit(input) {
            Ok(artifacts) => artifacts,
            Err(e) => {
                tracing::warn!(editor = slug, error = %e, "adapter failed");
                return EditorOutcome {
                    slug: slug.to_string(),
                    status: EditorStatus::Failed {
                        message: e.to_string(),
                    },
                    skipped,
                };
            }
        };

        let status = if request.options.dry_run {
            EditorStatus::Previewed {
                previews: preview_artifacts(&request.output_root, artifacts),
            }
        } else {
            write_artifacts(&request.output_root, artifacts)
        };

        EditorOutcome {
            slug: slug.to_string(),
            status,
            skipped,
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn preview_artifacts(root: &NormalizedPath, artifacts: Vec<FileArtifact>) -> Vec<ArtifactPreview> {
    artifacts
        .into_iter()
        .map(|artifact| {
            let path = root.join(&artifact.relative_path);
            let existing = if path.exists() {
                io::read_text(&path).unwrap_or_default()
            } else {
                String::new()
            };
            let new = artifact.content_str().unwrap_or_default();
            let diff = unified_diff(&existing, new, &artifact.relative_path);
            ArtifactPreview { artifact, diff }
        })
        .collect()
}

/// Write artifacts honoring each one's [`FileMode`]. A failed write is
/// recorded and the remaining artifacts are still attempted; nothing
/// already written is rolled back.
fn write_artifacts(root: &NormalizedPath, artifacts: Vec<FileArtifact>) -> EditorStatus {
    let mut paths = Vec::with_capacity(artifacts.len());
    let mut write_errors = Vec::new();

    for artifact in artifacts {
        let path = root.join(&artifact.relative_path);

        // A create-only artifact over an existing file is a no-op, not a
        // write; it must not appear in the written-path list.
        if artifact.mode == FileMode::Create && path.exists() {
            tracing::debug!(path = %path, "exists, create-only artifact left untouched");
            continue;
        }

        let result = match artifact.mode {
            FileMode::Create | FileMode::Overwrite => io::write_atomic(&path, &artifact.content),
            FileMode::AppendMerge => {
                io::append_text(&path, artifact.content_str().unwrap_or_default())
            }
        };

        match result {
            Ok(()) => {
                tracing::debug!(path = %path, "wrote artifact");
                paths.push(artifact.relative_path);
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "write failed");
                write_errors.push(format!("{}: {}", artifact.relative_path, e));
            }
        }
    }

    EditorStatus::Written {
        paths,
        write_errors,
    }
}
