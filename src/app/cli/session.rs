//! Interactive generation session.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::app::AppContext;
use crate::app::commands::generate;
use crate::domain::{AppConfig, AppError, ComponentName, ComponentSpec, PromptTemplateSource};
use crate::ports::{ArtifactStore, CompletionClient};

/// Source of answers for an interactive session.
pub(crate) trait SessionInput {
    /// Ask for every field of a component. `None` means the user quit.
    fn component_spec(&self) -> Result<Option<ComponentSpec>, AppError>;

    /// Ask a yes/no question. Quitting counts as "no".
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;
}

/// What an interactive session produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SessionSummary {
    pub generated: Vec<PathBuf>,
    pub failed_attempts: usize,
}

pub(crate) fn run_session<C, S, T>(
    ctx: &AppContext<C, S, T>,
    config: &AppConfig,
    input: &impl SessionInput,
) -> Result<SessionSummary, AppError>
where
    C: CompletionClient,
    S: ArtifactStore,
    T: PromptTemplateSource,
{
    let mut summary = SessionSummary::default();

    println!("Welcome to the React Component Generator!");
    println!("Enter the details of the component you'd like to build:");

    loop {
        let Some(spec) = input.component_spec()? else {
            return Ok(summary);
        };

        loop {
            match generate::execute(ctx, &spec, config) {
                Ok(outcome) => {
                    println!(
                        "✅ Component saved to {} ({} bytes)",
                        outcome.path.display(),
                        outcome.bytes
                    );
                    summary.generated.push(outcome.path);
                    break;
                }
                Err(err) if err.is_generation_failure() => {
                    summary.failed_attempts += 1;
                    eprintln!("Error: {}", err);
                    if !input.confirm("Try again?", true)? {
                        break;
                    }
                }
                Err(err @ AppError::Authentication { .. }) => return Err(err),
                Err(err) => {
                    summary.failed_attempts += 1;
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        if !input.confirm("Generate another component?", false)? {
            return Ok(summary);
        }
    }
}

/// Terminal questions backed by dialoguer.
pub(crate) struct DialoguerInput;

impl SessionInput for DialoguerInput {
    fn component_spec(&self) -> Result<Option<ComponentSpec>, AppError> {
        let Some(name) = ask_component_name()? else {
            return Ok(None);
        };
        let mut spec = ComponentSpec::named(name);
        if !fill_fields(&mut spec, ask_text)? {
            return Ok(None);
        }
        Ok(Some(spec))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(prompt).default(default).interact_opt() {
            Ok(answer) => Ok(answer.unwrap_or(false)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(err) => Err(AppError::Input { field: prompt.to_string(), details: err.to_string() }),
        }
    }
}

fn ask_component_name() -> Result<Option<ComponentName>, AppError> {
    let answer = Input::<String>::new()
        .with_prompt("Component Name")
        .validate_with(|value: &String| -> Result<(), String> {
            if ComponentName::is_valid(value) {
                Ok(())
            } else {
                Err("Use a non-empty name without path separators".to_string())
            }
        })
        .interact_text();

    match answer {
        Ok(value) => ComponentName::new(&value).map(Some),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input {
            field: "Component Name".to_string(),
            details: err.to_string(),
        }),
    }
}

/// Questions for the free-text fields, in the order they are asked.
const FIELD_QUESTIONS: [&str; 5] = [
    "Purpose",
    "Props (describe as a list)",
    "Behavior",
    "Styling (optional)",
    "Examples (optional)",
];

/// Fill the free-text fields of `spec` from `ask`, one question per field.
///
/// Every answer is taken as given, empty included. Returns `false` when
/// `ask` reports that the user quit.
fn fill_fields(
    spec: &mut ComponentSpec,
    mut ask: impl FnMut(&str) -> Result<Option<String>, AppError>,
) -> Result<bool, AppError> {
    let slots = [
        &mut spec.purpose,
        &mut spec.props,
        &mut spec.behavior,
        &mut spec.styling,
        &mut spec.examples,
    ];
    for (slot, question) in slots.into_iter().zip(FIELD_QUESTIONS) {
        match ask(question)? {
            Some(value) => *slot = value,
            None => return Ok(false),
        }
    }
    Ok(true)
}

fn ask_text(prompt: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input { field: prompt.to_string(), details: err.to_string() }),
    }
}
