use super::client_models::{RequestDetails, RequestInfo};
use crate::core::error::CliError;
use dothttp_lib::core::paths::{clean_path, display_path, is_http_file};
use dothttp_lib::debug_log;
use dothttp_lib::environment::load_environment;
use dothttp_lib::model::CaseInsensitiveMap;
use dothttp_lib::syntax::diagnostic::UNRESOLVED_VARIABLE;
use dothttp_lib::syntax::{
    find_dependency_cycle, validate_dependencies, Diagnostic, Segment, SourceLocation,
    VariableResolver,
};
use dothttp_lib::{DotHttpConfig, DotHttpEnvironment, DotHttpError, DotHttpFile, DotHttpRequest};
use std::fs;
use std::path::{Path, PathBuf};

pub struct DotHttpClient {
    config: DotHttpConfig,
}

impl DotHttpClient {
    pub fn new(config: DotHttpConfig) -> Self {
        Self { config }
    }

    pub fn list_requests(&self, source_path: &Path) -> Result<Vec<RequestInfo>, CliError> {
        let mut requests = Vec::new();
        for file in self.parse_all(source_path)? {
            let file_name = display_path(file.file_path.as_deref().unwrap_or_default());
            for request in &file.requests {
                requests.push(RequestInfo {
                    name: request.display_name(),
                    method: request.method.clone().unwrap_or_default(),
                    url: request.url.clone().unwrap_or_default(),
                    file: file_name.clone(),
                    line: request.line_number,
                    depends_on: request.depends_on.clone(),
                });
            }
        }

        requests.sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));

        Ok(requests)
    }

    pub fn get_request_details(
        &self,
        source_path: &Path,
        request_name: &str,
        environment: Option<&str>,
    ) -> Result<RequestDetails, CliError> {
        let env_name = environment.unwrap_or(self.config.environment.as_str());
        let env = self.load_environment(source_path, environment)?;

        for file in self.parse_all(source_path)? {
            let Some(request) = file.find_request_by_label(request_name) else {
                continue;
            };
            debug_log!(
                "Found request '{request_name}' in {}",
                file.file_path.as_deref().unwrap_or_default()
            );
            return self.resolve_request(&file, request, &env, env_name);
        }

        Err(DotHttpError::RequestNotFound(request_name.to_string()).into())
    }

    pub fn list_environments(&self, source_path: &Path) -> Result<Vec<String>, CliError> {
        ensure_exists(source_path)?;
        let env = load_environment(source_path)?;
        Ok(env
            .environment_names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Parse diagnostics, unknown dependencies and dependency cycles for every
    /// file under `source_path`. With an environment, unresolved variables are
    /// reported as well.
    pub fn check(
        &self,
        source_path: &Path,
        environment: Option<&str>,
    ) -> Result<Vec<Diagnostic>, CliError> {
        let env = match environment {
            Some(name) => Some((self.load_environment(source_path, Some(name))?, name)),
            None => None,
        };

        let mut diagnostics = Vec::new();
        for file in self.parse_all(source_path)? {
            diagnostics.extend(file.diagnostics.iter().cloned());
            diagnostics.extend(validate_dependencies(&file));
            diagnostics.extend(find_dependency_cycle(&file));
            if let Some((env, env_name)) = &env {
                for request in &file.requests {
                    diagnostics.extend(unresolved_variables(&file, request, env, env_name)?);
                }
            }
        }
        Ok(diagnostics)
    }

    fn load_environment(
        &self,
        source_path: &Path,
        requested: Option<&str>,
    ) -> Result<DotHttpEnvironment, CliError> {
        ensure_exists(source_path)?;
        let env = load_environment(source_path)?;
        if let Some(name) = requested {
            if !env.has_environment(name) {
                return Err(DotHttpError::EnvironmentNotFound(name.to_string()).into());
            }
        }
        Ok(env)
    }

    fn resolve_request(
        &self,
        file: &DotHttpFile,
        request: &DotHttpRequest,
        env: &DotHttpEnvironment,
        env_name: &str,
    ) -> Result<RequestDetails, CliError> {
        let resolver = VariableResolver::new()
            .with_file(file)
            .with_request(request)
            .with_environment(env, env_name);

        let mut unresolved: Vec<String> = Vec::new();
        let mut render = |text: &str| -> Result<String, CliError> {
            let resolved = resolver.resolve(text).map_err(DotHttpError::from)?;
            unresolved.extend(resolved.unresolved().into_iter().map(str::to_string));
            Ok(resolved.render(render_runtime_segment))
        };

        let url = render(request.url.as_deref().unwrap_or_default())?;
        let mut headers = CaseInsensitiveMap::new();
        for (name, value) in request.headers.iter() {
            headers.insert(render(name)?, render(value)?);
        }
        let body = request.body.as_deref().map(&mut render).transpose()?;

        if let Some(name) = unresolved.first() {
            debug_log!("Unresolved variables: {unresolved:?}");
            return Err(DotHttpError::UnresolvedVariable(name.clone()).into());
        }

        Ok(RequestDetails {
            name: request.display_name(),
            method: request.method.clone().unwrap_or_default(),
            url,
            http_version: request.http_version.clone(),
            headers,
            body,
            body_file_path: request.body_file_path.clone(),
            depends_on: request.depends_on.clone(),
            environment: env_name.to_string(),
            file: display_path(file.file_path.as_deref().unwrap_or_default()),
            line: request.line_number,
        })
    }

    fn parse_all(&self, source_path: &Path) -> Result<Vec<DotHttpFile>, CliError> {
        collect_files(source_path)?
            .iter()
            .map(|path| self.parse_file(path))
            .collect()
    }

    fn parse_file(&self, path: &Path) -> Result<DotHttpFile, CliError> {
        DotHttpFile::from_path_with_options(path, self.config.parse_options())
            .map_err(CliError::from)
    }
}

fn ensure_exists(source_path: &Path) -> Result<(), CliError> {
    if source_path.exists() {
        Ok(())
    } else {
        Err(DotHttpError::PathNotFound(source_path.display().to_string()).into())
    }
}

/// The `.http`/`.rest` files at `source_path`, a single file or a directory
/// searched recursively, in path order.
fn collect_files(source_path: &Path) -> Result<Vec<PathBuf>, CliError> {
    ensure_exists(source_path)?;
    if source_path.is_file() {
        return Ok(vec![source_path.to_path_buf()]);
    }
    if !source_path.is_dir() {
        return Err(CliError::NotADirectory(clean_path(source_path)));
    }

    let mut files = Vec::new();
    collect_files_in(source_path, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files_in(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files_in(&path, files)?;
        } else if is_http_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Placeholder text for values only known when the request is sent.
fn render_runtime_segment(segment: &Segment) -> String {
    match segment {
        Segment::Literal(text) => text.clone(),
        Segment::Secret { value, .. } => format!(
            "{{{{secret:{}:{}}}}}",
            value.provider.as_deref().unwrap_or_default(),
            value.secret_name.as_deref().unwrap_or_default()
        ),
        Segment::Dynamic { name, args } if args.is_empty() => format!("{{{{${name}}}}}"),
        Segment::Dynamic { name, args } => format!("{{{{${name} {}}}}}", args.join(" ")),
        Segment::ResponseReference { request, path } => {
            format!("{{{{{request}.response.{path}}}}}")
        }
        Segment::Unresolved(name) => format!("{{{{{name}}}}}"),
    }
}

fn unresolved_variables(
    file: &DotHttpFile,
    request: &DotHttpRequest,
    env: &DotHttpEnvironment,
    env_name: &str,
) -> Result<Vec<Diagnostic>, CliError> {
    let resolver = VariableResolver::new()
        .with_file(file)
        .with_request(request)
        .with_environment(env, env_name);

    let texts = request
        .url
        .iter()
        .map(String::as_str)
        .chain(request.headers.iter().flat_map(|(n, v)| [n, v]))
        .chain(request.body.as_deref());

    let mut names: Vec<String> = Vec::new();
    for text in texts {
        let resolved = resolver.resolve(text).map_err(DotHttpError::from)?;
        for name in resolved.unresolved() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }

    Ok(names
        .iter()
        .map(|name| {
            let location =
                SourceLocation::point(file.file_path.as_deref(), request.line_number, 1);
            UNRESOLVED_VARIABLE.create(Some(location), &[name.as_str(), env_name])
        })
        .collect())
}
