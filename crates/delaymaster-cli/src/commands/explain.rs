use crate::cli::EngineArg;
use crate::support::{print_json, yes_no};
use delaymaster_kernel::{Rejection, Validator, Verdict, WolfBlock, blocks};
use serde::Serialize;

pub struct Args {
    pub input: String,
    pub engine: EngineArg,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct Explanation {
    pub input: String,
    pub engine: String,
    pub verdict: Verdict,
    pub blocks: Vec<BlockRow>,
    pub rejection: Option<Rejection>,
    pub reason: Option<String>,
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct BlockRow {
    #[serde(flatten)]
    pub block: WolfBlock,
    pub text: String,
    pub well_formed: bool,
}

/// Every `w+o+l+f+` run in the input, plus the verdict and first rejection.
pub fn explain(validator: &Validator, input: &str) -> Explanation {
    let outcome = validator.validate(input);
    let rows = blocks(input)
        .map(|block| BlockRow {
            block,
            text: input[block.start..block.end].to_string(),
            well_formed: block.is_well_formed(),
        })
        .collect();
    let rejection = outcome.err();

    Explanation {
        input: input.to_string(),
        engine: validator.engine().to_string(),
        verdict: Verdict::from(rejection.is_none()),
        blocks: rows,
        reason: rejection.as_ref().map(ToString::to_string),
        offset: rejection.as_ref().map(Rejection::offset),
        rejection,
    }
}

pub fn render(explanation: &Explanation) -> String {
    let mut lines = vec![
        format!(
            "delaymaster explain {:?} --engine {}",
            explanation.input, explanation.engine
        ),
        format!("  Verdict: {}", explanation.verdict),
        format!("  Blocks: {}", explanation.blocks.len()),
    ];
    for row in &explanation.blocks {
        lines.push(format!(
            "    - {} {} well-formed: {}",
            row.block,
            row.text,
            yes_no(row.well_formed)
        ));
    }
    if let Some(reason) = &explanation.reason {
        lines.push(format!("  Reason: {reason}"));
    }
    if let Some(offset) = explanation.offset {
        lines.push(format!("  Offset: {offset}"));
    }
    lines.join("\n")
}

pub fn run(args: Args) {
    let validator = Validator::new(args.engine.into());
    let explanation = explain(&validator, &args.input);

    if args.json {
        print_json(&explanation);
    } else {
        println!("{}", render(&explanation));
    }
}
