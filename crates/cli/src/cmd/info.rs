use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use opengv_dist_lib::consts::{
  APP_VERSION, EXTENSION_DATA_PATTERN, PACKAGE_NAME, PROJECT_AUTHOR, PROJECT_DESCRIPTION, PROJECT_DOCUMENTATION_URL,
  PROJECT_LICENSE, PROJECT_NAME, PROJECT_URL, PROJECT_VERSION, README_FILENAME,
};
use opengv_dist_lib::extension::{ExtensionDescriptor, project_extensions};
use opengv_dist_lib::platform::{MACOSX_DEPLOYMENT_TARGET, host_wheel_tag};

use crate::output::{OutputFormat, print_field, print_json, print_section, print_warning};

#[derive(Serialize)]
struct InfoOutput<'a> {
  tool_version: &'a str,
  name: &'a str,
  version: &'a str,
  description: &'a str,
  url: &'a str,
  documentation_url: &'a str,
  author: &'a str,
  license: &'a str,
  package: &'a str,
  package_data: &'a str,
  extensions: Vec<ExtensionDescriptor>,
  platform_tag: Option<String>,
  readme_present: bool,
}

pub fn cmd_info(project_dir: &Path, format: OutputFormat) -> Result<()> {
  let deployment_target = std::env::var(MACOSX_DEPLOYMENT_TARGET).ok();
  let host_tag = host_wheel_tag(deployment_target.as_deref());

  let info = InfoOutput {
    tool_version: APP_VERSION,
    name: PROJECT_NAME,
    version: PROJECT_VERSION,
    description: PROJECT_DESCRIPTION,
    url: PROJECT_URL,
    documentation_url: PROJECT_DOCUMENTATION_URL,
    author: PROJECT_AUTHOR,
    license: PROJECT_LICENSE,
    package: PACKAGE_NAME,
    package_data: EXTENSION_DATA_PATTERN,
    extensions: project_extensions(),
    platform_tag: host_tag.as_ref().ok().cloned(),
    readme_present: project_dir.join(README_FILENAME).is_file(),
  };

  if format.is_json() {
    return print_json(&info);
  }

  print_section("Package");
  print_field("Name", info.name);
  print_field("Version", info.version);
  print_field("Summary", info.description);
  print_field("Home-page", info.url);
  print_field("Documentation", info.documentation_url);
  print_field("Author", info.author);
  print_field("License", info.license);
  print_field("Package data", &format!("{}/{}", info.package, info.package_data));
  for extension in &info.extensions {
    let kind = if extension.is_prebuilt() { "prebuilt" } else { "compiled" };
    print_field("Extension", &format!("{} ({})", extension.name, kind));
  }
  print_field("Readme", if info.readme_present { "present" } else { "missing" });

  println!();
  print_section("System");
  match &host_tag {
    Ok(tag) => print_field("Wheel tag", tag),
    Err(e) => print_warning(&e.to_string()),
  }

  Ok(())
}
