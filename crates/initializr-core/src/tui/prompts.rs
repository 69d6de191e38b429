//! Charm-style CLI prompts using cliclack

use crate::client::GeneratorClient;
use crate::compat::{offered_components, ComponentDescriptor};
use crate::extract::{check_target_available, extract_archive};
use crate::metadata::Metadata;
use crate::product::ProductConfig;
use crate::project::{validate_identifier, ProjectRequest};
use crate::runtime::check_java;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Answers that can be given up front instead of prompted for
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, also the directory the project is extracted into
    pub name: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub package_name: Option<String>,
    pub language: Option<String>,
    pub java_version: Option<String>,
    pub boot_version: Option<String>,
    pub project_type: Option<String>,
    pub packaging: Option<String>,
    pub dependencies: Option<Vec<String>>,

    /// Generator service root, overriding the product default
    pub service_url: Option<String>,

    /// Accept service defaults for anything not given (non-interactive mode)
    pub yes: bool,
}

/// A select option as (id, label, hint)
type Choice<'a> = (&'a str, &'a str, &'a str);

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Setup client
    let client = setup_client(config, &args)?;

    // Step 2: Load the options the service offers
    let metadata = load_metadata(&client).await?;

    // Step 3: Collect answers
    let request = collect_answers(&metadata, &args)?;
    let project_dir = PathBuf::from(&request.name);

    // Step 4: Generate and extract
    create_project(&client, &request, &project_dir).await?;

    // Step 5: Check the local toolchain (advisory)
    check_toolchain(&request)?;

    // Step 6: Show next steps
    print_next_steps(config, &project_dir, &request)?;

    Ok(())
}

fn setup_client<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<GeneratorClient> {
    let client = GeneratorClient::with_override(config, args.service_url.as_deref())?;
    cliclack::log::info(format!("Using generator at {}", client.endpoint().base()))?;
    Ok(client)
}

async fn load_metadata(client: &GeneratorClient) -> Result<Metadata> {
    let spinner = cliclack::spinner();
    spinner.start("Loading project options...");

    match client.fetch_metadata().await {
        Ok(metadata) => {
            spinner.stop("Project options loaded");
            Ok(metadata)
        }
        Err(e) => {
            spinner.stop("Failed to load project options");
            Err(e)
        }
    }
}

fn collect_answers(metadata: &Metadata, args: &CreateArgs) -> Result<ProjectRequest> {
    let defaults = ProjectRequest::with_defaults(metadata);

    let name = text_answer(
        "Name of the project",
        args.name.as_deref(),
        &defaults.name,
        args.yes,
        validate_project_name,
    )?;
    let group_id = text_answer(
        "Group Id",
        args.group_id.as_deref(),
        &defaults.group_id,
        args.yes,
        validate_identifier,
    )?;
    let artifact_id = text_answer(
        "Artifact Id",
        args.artifact_id.as_deref(),
        &defaults.artifact_id,
        args.yes,
        validate_identifier,
    )?;
    let version = text_answer(
        "Project version",
        args.version.as_deref(),
        &defaults.version,
        args.yes,
        validate_identifier,
    )?;
    let description = text_answer(
        "Write a short description",
        args.description.as_deref(),
        &defaults.description,
        args.yes,
        accept_any,
    )?;

    let language = select_answer(
        "Pick a language",
        args.language.as_deref(),
        &simple_choices(&metadata.language.values),
        metadata.language.default_id(),
        args.yes,
    )?;
    let java_version = select_answer(
        "Java version",
        args.java_version.as_deref(),
        &simple_choices(&metadata.java_version.values),
        metadata.java_version.default_id(),
        args.yes,
    )?;
    let boot_version = select_answer(
        "Spring Boot version",
        args.boot_version.as_deref(),
        &simple_choices(&metadata.boot_version.values),
        metadata.boot_version.default_id(),
        args.yes,
    )?;

    let project_types: Vec<Choice<'_>> = metadata
        .project_types()
        .into_iter()
        .map(|t| (t.id.as_str(), t.name.as_str(), t.description.as_deref().unwrap_or("")))
        .collect();
    let project_type = select_answer(
        "Type of the project",
        args.project_type.as_deref(),
        &project_types,
        metadata.project_type.default_id(),
        args.yes,
    )?;

    let packaging = select_answer(
        "Packaging type",
        args.packaging.as_deref(),
        &simple_choices(&metadata.packaging.values),
        metadata.packaging.default_id(),
        args.yes,
    )?;

    let dependencies = select_dependencies(metadata, &boot_version, args)?;

    // The package name follows the chosen group/artifact unless given explicitly
    let package_name = args
        .package_name
        .clone()
        .or_else(|| Some(derive_package_name(&group_id, &artifact_id)));

    Ok(ProjectRequest {
        name,
        group_id,
        artifact_id,
        version,
        description,
        package_name,
        language,
        java_version,
        boot_version,
        project_type,
        packaging,
        dependencies,
    })
}

fn validate_project_name(value: &str) -> Result<()> {
    validate_identifier(value)?;
    check_target_available(Path::new(value.trim()))?;
    Ok(())
}

fn accept_any(_value: &str) -> Result<()> {
    Ok(())
}

/// `com.example` + `my-app` -> `com.example.myapp`
fn derive_package_name(group_id: &str, artifact_id: &str) -> String {
    let artifact: String = artifact_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    match (group_id.is_empty(), artifact.is_empty()) {
        (true, _) => artifact.to_lowercase(),
        (false, true) => group_id.to_string(),
        (false, false) => format!("{}.{}", group_id, artifact.to_lowercase()),
    }
}

fn text_answer(
    title: &str,
    provided: Option<&str>,
    default: &str,
    yes: bool,
    validate: fn(&str) -> Result<()>,
) -> Result<String> {
    if let Some(value) = provided {
        validate(value).with_context(|| format!("{}: '{}'", title, value))?;
        return Ok(value.trim().to_string());
    }

    if yes {
        validate(default).with_context(|| format!("{}: '{}'", title, default))?;
        return Ok(default.to_string());
    }

    let input: String = cliclack::input(title)
        .placeholder(default)
        .default_input(default)
        .validate(move |input: &String| validate(input).map_err(|e| e.to_string()))
        .interact()?;

    Ok(input.trim().to_string())
}

fn simple_choices(values: &[crate::metadata::SelectOption]) -> Vec<Choice<'_>> {
    values
        .iter()
        .map(|v| (v.id.as_str(), v.name.as_str(), v.description.as_deref().unwrap_or("")))
        .collect()
}

fn select_answer(
    title: &str,
    provided: Option<&str>,
    choices: &[Choice<'_>],
    default: Option<&str>,
    yes: bool,
) -> Result<String> {
    if choices.is_empty() {
        anyhow::bail!("The generator offers no options for '{}'", title);
    }

    if let Some(value) = provided {
        if !choices.iter().any(|(id, _, _)| *id == value) {
            let available: Vec<&str> = choices.iter().map(|(id, _, _)| *id).collect();
            anyhow::bail!(
                "{}: '{}' is not available. Available: {}",
                title,
                value,
                available.join(", ")
            );
        }
        return Ok(value.to_string());
    }

    let default = default
        .filter(|d| choices.iter().any(|(id, _, _)| id == d))
        .unwrap_or(choices[0].0);

    if yes || choices.len() == 1 {
        return Ok(default.to_string());
    }

    let mut select = cliclack::select(title);
    for (id, label, hint) in choices {
        select = select.item(id.to_string(), *label, *hint);
    }

    let selected: String = select.initial_value(default.to_string()).interact()?;
    Ok(selected)
}

fn select_dependencies(
    metadata: &Metadata,
    boot_version: &str,
    args: &CreateArgs,
) -> Result<Vec<String>> {
    let components = metadata.components();
    let offered = offered_components(&components, boot_version);

    if let Some(requested) = &args.dependencies {
        return resolve_requested(requested, &components, &offered, boot_version);
    }

    if args.yes || offered.is_empty() {
        return Ok(Vec::new());
    }

    for component in &components {
        if let Some(issue) = &component.compatibility_issue {
            cliclack::log::warning(format!(
                "Version range for '{}' was relaxed: {}",
                component.id, issue
            ))?;
        }
    }

    let hidden = components.len() - offered.len();
    if hidden > 0 {
        cliclack::log::info(format!(
            "{} dependencies hidden (not compatible with Spring Boot {})",
            hidden, boot_version
        ))?;
    }

    let mut multi = cliclack::multiselect("Add dependencies");
    for component in &offered {
        multi = multi.item(component.id.clone(), &component.name, &component.group);
    }

    let selected: Vec<String> = multi.required(false).interact()?;
    Ok(selected)
}

/// Check dependencies given up front against what the boot version supports
fn resolve_requested(
    requested: &[String],
    components: &[ComponentDescriptor],
    offered: &[&ComponentDescriptor],
    boot_version: &str,
) -> Result<Vec<String>> {
    let mut chosen: Vec<String> = Vec::new();

    for id in requested.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if offered.iter().any(|c| c.id == id) {
            if !chosen.iter().any(|c| c == id) {
                chosen.push(id.to_string());
            }
            continue;
        }

        match components.iter().find(|c| c.id == id) {
            Some(component) => {
                let range = component.compatibility.to_string();
                if range.is_empty() {
                    anyhow::bail!(
                        "Dependency '{}' is not compatible with Spring Boot {}",
                        id,
                        boot_version
                    );
                }
                anyhow::bail!(
                    "Dependency '{}' requires Spring Boot {} (selected {})",
                    id,
                    range,
                    boot_version
                );
            }
            None => anyhow::bail!("Unknown dependency '{}'", id),
        }
    }

    Ok(chosen)
}

async fn create_project(
    client: &GeneratorClient,
    request: &ProjectRequest,
    project_dir: &Path,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Generating project...");

    let archive = match client.generate(request).await {
        Ok(bytes) => bytes,
        Err(e) => {
            spinner.stop("Failed to generate project");
            return Err(e);
        }
    };

    let target = project_dir.to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_archive(&archive, &target))
        .await
        .context("Extraction task panicked")?;

    match extracted {
        Ok(summary) => {
            spinner.stop(format!(
                "Created {} files in {}",
                summary.files,
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to extract project");
            if e.is_invalid_archive() {
                Err(anyhow::Error::new(e).context("The generator returned an unusable archive"))
            } else {
                Err(e.into())
            }
        }
    }
}

fn check_toolchain(request: &ProjectRequest) -> Result<()> {
    let java = check_java();
    if java.available {
        cliclack::log::success(format!(
            "Detected {} ({})",
            java.name,
            java.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::warning(format!(
            "No JDK found on PATH. Java {} is needed to build this project.",
            request.java_version
        ))?;
    }
    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    request: &ProjectRequest,
) -> Result<()> {
    let steps = config.next_steps(project_dir, request);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Docs: {}", config.docs_url());

    cliclack::outro("Happy coding!")?;

    Ok(())
}
