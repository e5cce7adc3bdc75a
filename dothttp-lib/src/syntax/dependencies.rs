use super::diagnostic::{Diagnostic, SourceLocation, DEPENDENCY_CYCLE, UNKNOWN_DEPENDENCY};
use crate::core::error::DotHttpError;
use crate::model::DotHttpFile;

/// One `DOTHTTP004` error per dependency name that no request in the file
/// declares.
pub fn validate_dependencies(file: &DotHttpFile) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for request in &file.requests {
        for dependency in &request.depends_on {
            if file.find_request(dependency).is_some() {
                continue;
            }
            let location = SourceLocation::point(
                file.file_path.as_deref(),
                request.line_number,
                1,
            );
            let name = request.display_name();
            diagnostics.push(
                UNKNOWN_DEPENDENCY.create(Some(location), &[name.as_str(), dependency.as_str()]),
            );
        }
    }
    diagnostics
}

/// A `DOTHTTP006` error at the first request found on a dependency cycle.
pub fn find_dependency_cycle(file: &DotHttpFile) -> Option<Diagnostic> {
    let Err(DotHttpError::DependencyCycle(name)) = execution_order(file) else {
        return None;
    };
    let line = file
        .requests
        .iter()
        .find(|r| r.display_name() == name)
        .map_or(0, |r| r.line_number);
    let location = SourceLocation::point(file.file_path.as_deref(), line, 1);
    Some(DEPENDENCY_CYCLE.create(Some(location), &[name.as_str()]))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// Request indices with every dependency ahead of its dependents. Requests
/// otherwise keep file order. Unknown dependency names are ignored here.
pub fn execution_order(file: &DotHttpFile) -> Result<Vec<usize>, DotHttpError> {
    let mut marks = vec![Mark::Unvisited; file.requests.len()];
    let mut order = Vec::with_capacity(file.requests.len());
    for index in 0..file.requests.len() {
        visit(file, index, &mut marks, &mut order)?;
    }
    Ok(order)
}

fn visit(
    file: &DotHttpFile,
    index: usize,
    marks: &mut [Mark],
    order: &mut Vec<usize>,
) -> Result<(), DotHttpError> {
    match marks[index] {
        Mark::Done => return Ok(()),
        Mark::Visiting => {
            return Err(DotHttpError::DependencyCycle(
                file.requests[index].display_name(),
            ))
        }
        Mark::Unvisited => {}
    }
    marks[index] = Mark::Visiting;
    for dependency in &file.requests[index].depends_on {
        let target = file
            .requests
            .iter()
            .position(|r| r.name.as_deref() == Some(dependency.as_str()));
        if let Some(target) = target {
            visit(file, target, marks, order)?;
        }
    }
    marks[index] = Mark::Done;
    order.push(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    #[test]
    fn test_unknown_dependency_is_reported() {
        let file = parse(
            Some("chain.http"),
            "# @name me\nGET /me\nAuthorization: Bearer {{login.response.body.token}}\n",
        );
        assert!(file.diagnostics.is_empty());

        let diagnostics = validate_dependencies(&file);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "DOTHTTP004");
        assert_eq!(
            diagnostics[0].message,
            "Request 'me' references the response of unknown request 'login'"
        );
        assert_eq!(diagnostics[0].line(), Some(2));
    }

    #[test]
    fn test_known_dependency_passes() {
        let content = "# @name login\nPOST /login\n\n###\nGET /me\nAuthorization: {{login.response.body.token}}\n";
        let file = parse(None, content);
        assert!(validate_dependencies(&file).is_empty());
    }

    #[test]
    fn test_execution_order_puts_dependencies_first() {
        let content = [
            "### me",
            "GET /me",
            "Authorization: {{login.response.body.token}}",
            "###",
            "GET /health",
            "### login",
            "POST /login",
        ]
        .join("\n");
        let file = parse(None, &content);
        assert_eq!(file.requests.len(), 3);
        assert_eq!(execution_order(&file).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_execution_order_detects_cycles() {
        let content = [
            "### a",
            "GET /a?x={{b.response.body.x}}",
            "### b",
            "GET /b?y={{a.response.body.y}}",
        ]
        .join("\n");
        let file = parse(None, &content);
        let err = execution_order(&file).unwrap_err();
        assert!(matches!(err, DotHttpError::DependencyCycle(ref name) if name == "a"));
    }

    #[test]
    fn test_cycle_becomes_diagnostic() {
        let content = [
            "# @name a",
            "GET /a?x={{b.response.body.x}}",
            "",
            "###",
            "# @name b",
            "GET /b?y={{a.response.body.y}}",
        ]
        .join("\n");
        let file = parse(Some("cycle.http"), &content);

        let diagnostic = find_dependency_cycle(&file).unwrap();
        assert_eq!(diagnostic.code, "DOTHTTP006");
        assert!(diagnostic.is_error());
        assert_eq!(diagnostic.line(), Some(2));
        assert!(diagnostic.message.contains("'a'"));
    }

    #[test]
    fn test_acyclic_file_has_no_cycle_diagnostic() {
        let content = "# @name login\nPOST /login\n\n###\nGET /me?t={{login.response.body.t}}\n";
        let file = parse(None, content);
        assert!(find_dependency_cycle(&file).is_none());
    }
}
