use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, output::Output},
        tac::instruction::{Instruction, Label, Operand, TacOp},
    },
    util::num::{add, div, from_bool, is_truthy, mul, sub},
};

/// Executes three-address code.
///
/// The machine never looks at the syntax tree: it only sees the instruction
/// list, which makes it an independent check of the generator against the
/// tree-walking evaluator.
///
/// Every `DECLARE` in the list reserves its variable at `0` before the first
/// instruction runs, mirroring how the evaluator builds its environment from
/// the symbol table. Errors report the 1-based index of the failing
/// instruction in their `line` field.
///
/// # Example
/// ```
/// use minipython::{check, interpreter::tac::{Machine, generate}};
///
/// let checked = check("int i; while (i < 3) { print(i); i = i + 1; }").unwrap();
/// let mut printed = Vec::new();
///
/// Machine::new().run(&generate(&checked), &mut printed).unwrap();
/// assert_eq!(printed, [0, 1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct Machine {
    variables:   HashMap<String, i64>,
    temporaries: HashMap<u32, i64>,
}

impl Machine {
    /// Creates a machine with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Runs `code` from the first instruction until it falls off the end.
    ///
    /// # Errors
    /// - `UndefinedLabel` if a jump targets a label that is never defined;
    ///   this is checked before anything executes.
    /// - `UnboundVariable` when loading or storing an undeclared variable,
    ///   reading a temporary that was never written or writing to a
    ///   constant.
    /// - `DivisionByZero` and `Overflow` from the arithmetic.
    pub fn run(&mut self, code: &[Instruction], out: &mut dyn Output) -> EvalResult<()> {
        let labels = resolve_labels(code)?;

        for instruction in code {
            if let Instruction::Declare { var } = instruction {
                self.variables.entry(var.clone()).or_insert(0);
            }
        }

        let mut pc = 0;
        while let Some(instruction) = code.get(pc) {
            let line = pc + 1;
            pc += 1;

            match instruction {
                Instruction::Declare { .. } | Instruction::Label { .. } => {},
                Instruction::Load { dest, var } => {
                    let value = self.load_variable(var, line)?;
                    self.write(dest, value, line)?;
                },
                Instruction::Store { var, src } => {
                    let value = self.read(src, line)?;
                    let slot = self.variables
                                   .get_mut(var)
                                   .ok_or_else(|| RuntimeError::UnboundVariable { name: var.clone(),
                                                                                  line })?;
                    *slot = value;
                    trace!(variable = %var, value, "stored");
                },
                Instruction::Binary { op, dest, lhs, rhs } => {
                    let lhs = self.read(lhs, line)?;
                    let rhs = self.read(rhs, line)?;
                    let value = apply(*op, lhs, rhs, line)?;
                    self.write(dest, value, line)?;
                },
                Instruction::Print { src } => {
                    let value = self.read(src, line)?;
                    trace!(value, "printed");
                    out.emit(value);
                },
                Instruction::Jump { label } => pc = labels[label],
                Instruction::JumpIfZero { src, label } => {
                    if !is_truthy(self.read(src, line)?) {
                        pc = labels[label];
                    }
                },
            }
        }

        Ok(())
    }

    fn load_variable(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string(),
                                                           line })
    }

    fn read(&self, operand: &Operand, line: usize) -> EvalResult<i64> {
        match operand {
            Operand::Const(value) => Ok(*value),
            Operand::Temp(id) => {
                self.temporaries
                    .get(id)
                    .copied()
                    .ok_or_else(|| RuntimeError::UnboundVariable { name: operand.to_string(),
                                                                   line })
            },
        }
    }

    fn write(&mut self, operand: &Operand, value: i64, line: usize) -> EvalResult<()> {
        match operand {
            Operand::Temp(id) => {
                self.temporaries.insert(*id, value);
                Ok(())
            },
            Operand::Const(_) => Err(RuntimeError::UnboundVariable { name: operand.to_string(),
                                                                      line }),
        }
    }
}

/// Maps every label to the index of the instruction following it.
fn resolve_labels(code: &[Instruction]) -> EvalResult<HashMap<Label, usize>> {
    let labels: HashMap<Label, usize> = code.iter()
                                            .enumerate()
                                            .filter_map(|(index, instruction)| match instruction {
                                                Instruction::Label { name } => Some((*name, index + 1)),
                                                _ => None,
                                            })
                                            .collect();

    for (index, instruction) in code.iter().enumerate() {
        if let Instruction::Jump { label } | Instruction::JumpIfZero { label, .. } = instruction
           && !labels.contains_key(label)
        {
            return Err(RuntimeError::UndefinedLabel { label: label.to_string(),
                                                      line:  index + 1, });
        }
    }

    Ok(labels)
}

fn apply(op: TacOp, lhs: i64, rhs: i64, line: usize) -> EvalResult<i64> {
    match op {
        TacOp::Add => add(lhs, rhs, line),
        TacOp::Sub => sub(lhs, rhs, line),
        TacOp::Mul => mul(lhs, rhs, line),
        TacOp::Div => div(lhs, rhs, line),
        TacOp::Lt => Ok(from_bool(lhs < rhs)),
        TacOp::Gt => Ok(from_bool(lhs > rhs)),
        TacOp::Lte => Ok(from_bool(lhs <= rhs)),
        TacOp::Gte => Ok(from_bool(lhs >= rhs)),
        TacOp::Eq => Ok(from_bool(lhs == rhs)),
        TacOp::Neq => Ok(from_bool(lhs != rhs)),
    }
}
