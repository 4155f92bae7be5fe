//! Text shown to the user: help, the tabular report and its JSON counterpart.

use anyhow::Result;
use lcr_params::{Convention, Focus, ParameterRow, TargetLength};
use serde::Serialize;
use std::io::Write;

/// Name the program introduces itself with.
pub fn program_name(convention: Convention) -> &'static str {
    match convention {
        Convention::Flps => "fLPSparameters",
        Convention::Seg => "SEGparameters",
    }
}

fn column_header(convention: Convention) -> [&'static str; 2] {
    match convention {
        Convention::Flps => [
            "\tEstimated_coverage\tm\tM\tt:",
            "\t------------------\t-\t-\t--",
        ],
        Convention::Seg => [
            "\tEstimated_coverage\tL\tK1\tK2:",
            "\t------------------\t-\t--\t---",
        ],
    }
}

/// What the footer recommends running repeatedly.
fn runs_of(convention: Convention) -> &'static str {
    match convention {
        Convention::Flps => "the fLPS program",
        Convention::Seg => "the SEG algorithm",
    }
}

pub fn help_text(convention: Convention) -> String {
    let title = format!(
        "Parameter choosing program for finding low-complexity or compositionally-biased \
         regions using {convention} in proteins of a given target length"
    );
    let underline = "=".repeat(title.len());
    let program = program_name(convention);
    let citation = match convention {
        Convention::Flps => "CITATION:",
        Convention::Seg => "CITATIONS:",
    };
    format!(
        "\n{title}\n{underline}\n\n\
The program options are:
 -h   prints help
 -f   focus of the parameters
      values: 'diverse' or 'narrow'; \n      \
diverse = more diversity or variance of length is allowed (DEFAULT)
      narrow  = narrowest focus on a particular target length
 -l   target length.
      This must be in the range 5-300 inclusive.

 The program outputs lists of suitable parameters for a given target length for \
low-complexity or compositionally-biased regions.
 There are sets of parameters output for estimated protein coverage of approximately \
2%, 5%, 10%, 25%, and 40%.
 The protein coverage is simply the proportion of proteins that are expected to be \
annotated or 'covered' when you choose
 a certain set of parameters.
 For some combinations of coverage level and target lengths, sets of parameters cannot \
be output because they are out of bounds.
 This is an example of running the program:
        ./{program} -f diverse -l 15 > parameters.out

 Here, diverse focus is specified with a target region length of 15 residues.

{citation}
 Harrison, PM. 'Optimal strategies for discovery of low-complexity or \
compositionally-biased regions',
 submitted. \nURLs:
 http://biology.mcgill.ca/faculty/harrison/flps.html
 OR \nhttps://github.com/pmharrison/flps
"
    )
}

/// Write the full text report: header, one line per row, footer.
pub fn write_report(
    out: &mut impl Write,
    convention: Convention,
    focus: Focus,
    target: TargetLength,
    rows: &[ParameterRow],
) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} has chosen the following parameters for target length {target} and focus {focus}:",
        program_name(convention)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", focus.explanation())?;
    for line in column_header(convention) {
        writeln!(out, "{line}")?;
    }
    for row in rows {
        writeln!(out, "{row}")?;
    }
    write!(
        out,
        "\n\nCoverage is the proportion of protein sequences expected to be labelled by these \
         parameter sets.\n\
         \nIt is recommended to use all of the parameters progressively in separate runs of {},\n \
         and compare the outputs.\n\
         If the calculated parameters are listed as 'NA', it means that at least one of them \
         was out of bounds.\n\n",
        runs_of(convention)
    )?;
    Ok(())
}

/// The report as a machine-readable document.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub program: &'static str,
    pub convention: Convention,
    pub target_length: TargetLength,
    pub focus: Focus,
    pub rows: &'a [ParameterRow],
}

impl<'a> JsonReport<'a> {
    pub fn new(
        convention: Convention,
        focus: Focus,
        target: TargetLength,
        rows: &'a [ParameterRow],
    ) -> JsonReport<'a> {
        JsonReport {
            program: program_name(convention),
            convention,
            target_length: target,
            focus,
            rows,
        }
    }

    pub fn write(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_help_text() {
        assert_eq!(
            help_text(Convention::Flps),
            std::fs::read_to_string("test/flps_help.txt").unwrap()
        );
        assert_eq!(
            help_text(Convention::Seg),
            std::fs::read_to_string("test/seg_help.txt").unwrap()
        );
    }

    #[test]
    fn test_report_layout() {
        let target = TargetLength::new(50).unwrap();
        let rows = lcr_params::recommend(Convention::Seg, Focus::Narrow, target);
        let mut out = Vec::new();
        write_report(&mut out, Convention::Seg, Focus::Narrow, target, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[1],
            "SEGparameters has chosen the following parameters for target length 50 and focus NARROW:"
        );
        assert_eq!(lines[4], "\tEstimated_coverage\tL\tK1\tK2:");
        assert_eq!(lines[6], "\t~2%\t\t\t50\t2.90\t2.90");
        assert_eq!(lines[10], "\t~40%\t\t\t50\t3.62\t3.62");
        assert!(text.ends_with("out of bounds.\n\n"));
    }

    #[test]
    fn test_json_report() {
        let target = TargetLength::new(15).unwrap();
        let rows = lcr_params::recommend(Convention::Flps, Focus::Diverse, target);
        let mut out = Vec::new();
        JsonReport::new(Convention::Flps, Focus::Diverse, target, &rows)
            .write(&mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["program"], "fLPSparameters");
        assert_eq!(value["convention"], "fLPS");
        assert_eq!(value["target_length"], 15);
        assert_eq!(value["focus"], "DIVERSE");
        assert_eq!(value["rows"].as_array().unwrap().len(), 5);
        assert_eq!(value["rows"][0]["outcome"]["valid"]["flps"]["big_m"], 10);
        assert_eq!(
            value["rows"][4]["outcome"]["not_available"]["length_or_threshold"]["min_length"],
            5
        );
    }
}
