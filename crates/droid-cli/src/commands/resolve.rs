//! Resolve and check command implementations

use std::path::Path;

use colored::Colorize;
use droid_core::{
    ConfigResolver, ExternalValuesResolver, Resolution, ResolveOptions, ResolvedConfig, Warning,
};
use droid_fs::NormalizedPath;
use droid_meta::DescriptorLoader;

use crate::cli::ResolveInput;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(input: &ResolveInput, json: bool, output: Option<&Path>) -> Result<()> {
    let resolution = resolve_input(input)?;
    print_warnings(&resolution.warnings);

    let config = &resolution.config;
    if let Some(output) = output {
        let rendered = format!("{}\n", config.to_json()?);
        droid_fs::io::write_text(&NormalizedPath::new(output), &rendered)?;
        eprintln!("{} {}", "Wrote".green(), output.display());
    }

    if json {
        println!("{}", config.to_json()?);
    } else {
        print_summary(config)?;
    }
    Ok(())
}

/// Run the check command
pub fn run_check(input: &ResolveInput) -> Result<()> {
    let resolution = resolve_input(input)?;
    print_warnings(&resolution.warnings);

    if resolution.has_warnings() {
        println!(
            "{} ({} warning{})",
            "ok".yellow().bold(),
            resolution.warnings.len(),
            if resolution.warnings.len() == 1 { "" } else { "s" }
        );
    } else {
        println!("{}", "ok".green().bold());
    }
    Ok(())
}

fn resolve_input(input: &ResolveInput) -> Result<Resolution> {
    let descriptor_path = std::env::current_dir()?.join(&input.descriptor);
    let descriptor = DescriptorLoader::new().load(&NormalizedPath::new(descriptor_path))?;

    let mut external = ExternalValuesResolver::new(descriptor.base_dir.clone());
    if let Some(dir) = &input.config_dir {
        external = external.with_global_config_dir(dir.as_path());
    }
    if input.no_discover {
        external = external.without_discovery();
    }
    for path in &input.properties {
        external = external.with_properties_file(path.as_path());
    }
    for spec in &input.overrides {
        external = external.with_override(spec.as_str());
    }
    let external = external.resolve()?;

    let resolver = ConfigResolver::with_options(ResolveOptions {
        host_plugin: input.host_plugin.clone(),
        deny_placeholder_signing: input.deny_placeholder_signing,
    });
    Ok(resolver.resolve(&descriptor, &external)?)
}

fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!(
            "{}: {} ({})",
            "warning".yellow().bold(),
            warning,
            warning.field().dimmed()
        );
    }
}

fn print_summary(config: &ResolvedConfig) -> Result<()> {
    println!("{}", "Resolved configuration".bold());
    println!();
    println!("{}:   {}", "Application".dimmed(), config.application_id.cyan());
    println!("{}:     {}", "Namespace".dimmed(), config.namespace);
    println!(
        "{}:       {} ({})",
        "Version".dimmed(),
        config.version_name,
        config.version_code
    );
    println!(
        "{}:           compile {}, min {}, target {}",
        "SDK".dimmed(),
        config.compile_sdk,
        config.min_sdk,
        config.target_sdk
    );
    if let Some(ndk) = &config.ndk_version {
        println!("{}:           {}", "NDK".dimmed(), ndk);
    }
    println!("{}:          {}", "Java".dimmed(), config.java_version);
    let signing = if config.signing.placeholder {
        format!("{} (placeholder)", config.signing.profile).yellow()
    } else {
        config.signing.profile.as_str().green()
    };
    println!("{}:       {}", "Signing".dimmed(), signing);
    println!(
        "{}:   {}",
        "Source root".dimmed(),
        config.source_root.display()
    );
    println!();

    println!("{}:", "Plugins".bold());
    for plugin in &config.plugins {
        println!("  {} {}", "+".green(), plugin.cyan());
    }
    println!();
    println!("{}:   {}", "Fingerprint".dimmed(), config.fingerprint()?);
    Ok(())
}
