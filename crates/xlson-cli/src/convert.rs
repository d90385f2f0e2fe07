use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use xlson_core::{NativeForm, SurveyNode, create_native_form};

type ConvertResult<T> = Result<T, Box<dyn std::error::Error>>;

const INDENT: &[u8] = b"    ";

/// Read a parsed XLSForm survey from disk.
pub fn load_survey(path: &Path) -> ConvertResult<SurveyNode> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read '{}': {}", path.display(), err))?;
    let survey = serde_json::from_str(&contents)
        .map_err(|err| format!("'{}' is not a valid survey: {}", path.display(), err))?;
    debug!(path = %path.display(), "survey loaded");
    Ok(survey)
}

/// Load and convert a survey file.
pub fn convert_file(path: &Path) -> ConvertResult<NativeForm> {
    let survey = load_survey(path)?;
    let form = create_native_form(&survey)?;
    Ok(form)
}

/// Encode the form as JSON, pretty-printed with a four space indent unless
/// `compact` is set.
pub fn render_form(form: &NativeForm, compact: bool) -> ConvertResult<String> {
    if compact {
        return Ok(serde_json::to_string(form)?);
    }
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    form.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Where the rendered document goes.
#[derive(Debug, Clone)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

pub fn write_form(rendered: &str, destination: &Destination) -> io::Result<()> {
    match destination {
        Destination::Stdout => {
            println!("{}", rendered);
            Ok(())
        }
        Destination::File(path) => {
            fs::write(path, format!("{}\n", rendered))?;
            info!(path = %path.display(), "native form written");
            Ok(())
        }
    }
}
