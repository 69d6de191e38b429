//! Spring Init - Spring Boot project generation from the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use initializr_core::tui::CreateArgs;
use initializr_core::{ProductConfig, ProjectRequest};
use std::path::Path;

/// Spring Initializr product configuration
#[derive(Clone)]
pub struct SpringInitConfig;

impl ProductConfig for SpringInitConfig {
    fn name(&self) -> &'static str {
        "spring-init"
    }

    fn display_name(&self) -> &'static str {
        "Spring Init"
    }

    fn default_service_url(&self) -> &'static str {
        "https://start.spring.io"
    }

    fn service_url_env(&self) -> &'static str {
        "SPRING_INIT_SERVICE_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://docs.spring.io/spring-boot/index.html"
    }

    fn next_steps(&self, dir: &Path, request: &ProjectRequest) -> Vec<String> {
        let mut steps = vec![format!("cd {}", dir.display())];

        if request.project_type.starts_with("gradle") {
            steps.push("./gradlew bootRun".to_string());
        } else {
            steps.push("./mvnw spring-boot:run".to_string());
        }

        if !request.dependencies.iter().any(|d| d == "web" || d == "webflux") {
            steps.push("Add a web dependency to serve HTTP endpoints".to_string());
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "spring-init")]
#[command(about = "CLI for generating Spring Boot projects from start.spring.io")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new Spring Boot project
    Create(CliCreateArgs),
    /// List the dependencies available for a Spring Boot version
    Dependencies(DependenciesArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name (also the directory to create)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Group id, e.g. com.example
    #[arg(short, long)]
    pub group: Option<String>,

    /// Artifact id
    #[arg(short, long)]
    pub artifact: Option<String>,

    /// Project version, e.g. 0.0.1-SNAPSHOT
    #[arg(long = "project-version")]
    pub project_version: Option<String>,

    /// Short project description
    #[arg(long)]
    pub description: Option<String>,

    /// Base package name (defaults to group + artifact)
    #[arg(long = "package-name")]
    pub package_name: Option<String>,

    /// Language: java, kotlin or groovy
    #[arg(short, long)]
    pub language: Option<String>,

    /// Java version, e.g. 21
    #[arg(long = "java-version")]
    pub java_version: Option<String>,

    /// Spring Boot version, e.g. 3.3.1
    #[arg(short, long = "boot-version")]
    pub boot_version: Option<String>,

    /// Project type, e.g. maven-project or gradle-project-kotlin
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,

    /// Packaging: jar or war
    #[arg(short, long)]
    pub packaging: Option<String>,

    /// Dependencies to include (comma-separated ids: web,data-jpa,lombok)
    #[arg(short, long, value_delimiter = ',')]
    pub dependencies: Option<Vec<String>>,

    /// Generator service URL (for self-hosted Initializr instances)
    #[arg(long = "service-url")]
    pub service_url: Option<String>,

    /// Accept service defaults for everything not given (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            group_id: args.group,
            artifact_id: args.artifact,
            version: args.project_version,
            description: args.description,
            package_name: args.package_name,
            language: args.language,
            java_version: args.java_version,
            boot_version: args.boot_version,
            project_type: args.project_type,
            packaging: args.packaging,
            dependencies: args.dependencies,
            service_url: args.service_url,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct DependenciesArgs {
    /// Spring Boot version to check against (defaults to the service default)
    #[arg(short, long = "boot-version")]
    pub boot_version: Option<String>,

    /// Generator service URL (for self-hosted Initializr instances)
    #[arg(long = "service-url")]
    pub service_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = SpringInitConfig;

    match args.command {
        Some(Command::Create(create_args)) => {
            let result = initializr_core::run(&config, create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Dependencies(deps_args)) => {
            initializr_core::catalog::list_dependencies(
                &config,
                deps_args.boot_version.as_deref(),
                deps_args.service_url.as_deref(),
            )
            .await
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = initializr_core::run(&config, CreateArgs::default()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(project_type: &str, dependencies: &[&str]) -> ProjectRequest {
        ProjectRequest {
            project_type: project_type.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            ..ProjectRequest::default()
        }
    }

    #[test]
    fn test_next_steps_follow_build_tool() {
        let config = SpringInitConfig;
        let dir = Path::new("demo");

        let maven = config.next_steps(dir, &request("maven-project", &["web"]));
        assert_eq!(maven, ["cd demo", "./mvnw spring-boot:run"]);

        let gradle = config.next_steps(dir, &request("gradle-project-kotlin", &["webflux"]));
        assert_eq!(gradle[1], "./gradlew bootRun");
    }

    #[test]
    fn test_next_steps_suggest_web_dependency() {
        let steps = SpringInitConfig.next_steps(Path::new("demo"), &request("maven-project", &[]));
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_create_args_conversion() {
        let args = Args::parse_from([
            "spring-init",
            "create",
            "--name",
            "orders",
            "-d",
            "web,data-jpa",
            "--type",
            "gradle-project",
            "--project-version",
            "1.0.0",
            "--yes",
        ]);
        let Some(Command::Create(cli)) = args.command else {
            panic!("expected create subcommand");
        };
        let create: CreateArgs = cli.into();

        assert_eq!(create.name.as_deref(), Some("orders"));
        assert_eq!(
            create.dependencies,
            Some(vec!["web".to_string(), "data-jpa".to_string()])
        );
        assert_eq!(create.project_type.as_deref(), Some("gradle-project"));
        assert_eq!(create.version.as_deref(), Some("1.0.0"));
        assert!(create.yes);
    }
}
