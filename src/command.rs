//! Rendering of the `pdftk` command line that performs the actual reordering.

use crate::imposition::PrintOrder;
use std::fmt;
use std::path::Path;

/// The tool used when none is configured
pub const DEFAULT_TOOL: &str = "pdftk";

/// Handle the input document is bound to on the command line
const INPUT_HANDLE: &str = "A";

/// A `pdftk`-style `cat` invocation emitting pages in print order.
///
/// Renders as `pdftk A=<input> cat A<p1> A<p2> ... output <output>`.
pub struct PdftkCommand<'a> {
    pub tool: &'a str,
    pub input: &'a Path,
    pub output: &'a Path,
    pub print_order: &'a PrintOrder,
}

impl fmt::Display for PdftkCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {INPUT_HANDLE}={} cat",
            self.tool,
            self.input.display()
        )?;
        for position in self.print_order.as_slice() {
            write!(f, " {INPUT_HANDLE}{position}")?;
        }
        write!(f, " output {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_pages_in_print_order() {
        let print_order = PrintOrder::from(vec![2, 7, 4, 5, 8, 1, 6, 3]);
        let input = PathBuf::from("in.pdf");
        let output = PathBuf::from("out.pdf");
        let command = PdftkCommand {
            tool: DEFAULT_TOOL,
            input: &input,
            output: &output,
            print_order: &print_order,
        };

        assert_eq!(
            command.to_string(),
            "pdftk A=in.pdf cat A2 A7 A4 A5 A8 A1 A6 A3 output out.pdf"
        );
    }

    #[test]
    fn uses_configured_tool() {
        let print_order = PrintOrder::from(vec![1]);
        let command = PdftkCommand {
            tool: "/usr/local/bin/pdftk",
            input: Path::new("a6/zine.pdf"),
            output: Path::new("print.pdf"),
            print_order: &print_order,
        };

        assert_eq!(
            command.to_string(),
            "/usr/local/bin/pdftk A=a6/zine.pdf cat A1 output print.pdf"
        );
    }
}
