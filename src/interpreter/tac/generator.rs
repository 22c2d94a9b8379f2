use tracing::debug;

use crate::{
    ast::{BinaryOperator, Block, Expr, Statement, UnaryOperator},
    interpreter::{
        semantic::CheckedProgram,
        tac::instruction::{Instruction, Label, Operand, TacOp},
    },
};

/// Lowers a checked program into three-address code.
///
/// Each call uses a fresh [`Generator`], so temporaries and labels are
/// numbered from 1 every time and the output is deterministic.
///
/// # Example
/// ```
/// use minipython::{check, interpreter::tac::{generate, render}};
///
/// let checked = check("int x; x = 1 + 2 * x;").unwrap();
/// assert_eq!(render(&generate(&checked)),
///            "DECLARE x\nLOAD t1, x\nMUL t2, 2, t1\nADD t3, 1, t2\nSTORE x, t3\n");
/// ```
#[must_use]
pub fn generate(checked: &CheckedProgram) -> Vec<Instruction> {
    Generator::new().generate(checked)
}

/// Stateful lowering pass.
///
/// Owns the instruction buffer and the two counters used to name
/// temporaries (`t1`, `t2`, ...) and labels (`L1`, `L2`, ...).
#[derive(Debug, Default)]
pub struct Generator {
    code:     Vec<Instruction>,
    temp_id:  u32,
    label_id: u32,
}

impl Generator {
    /// Creates a generator with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowers every top-level statement and returns the instruction list.
    ///
    /// Generation cannot fail: the input has already been checked.
    #[must_use]
    pub fn generate(mut self, checked: &CheckedProgram) -> Vec<Instruction> {
        for statement in &checked.program.statements {
            self.gen_stmt(statement);
        }

        debug!(instructions = self.code.len(),
               temporaries = self.temp_id,
               labels = self.label_id,
               "generated three-address code");
        self.code
    }

    fn new_temp(&mut self) -> Operand {
        self.temp_id += 1;
        Operand::Temp(self.temp_id)
    }

    fn new_label(&mut self) -> Label {
        self.label_id += 1;
        Label(self.label_id)
    }

    fn emit(&mut self, instruction: Instruction) {
        self.code.push(instruction);
    }

    /// Emits `dest = lhs <op> rhs` into a fresh temporary and returns it.
    fn emit_binary(&mut self, op: TacOp, lhs: Operand, rhs: Operand) -> Operand {
        let dest = self.new_temp();
        self.emit(Instruction::Binary { op,
                                        dest: dest.clone(),
                                        lhs,
                                        rhs });
        dest
    }

    /// Lowers an expression and returns the operand holding its value.
    ///
    /// Constants are returned as literal operands without emitting anything.
    /// Variables are loaded into a temporary. Operators are lowered after
    /// both operands, left first.
    ///
    /// `&&`, `||`, unary `-` and `!` have no opcode of their own and are
    /// expressed with the existing ones:
    /// - `-x` as `SUB t, 0, x`
    /// - `!x` as `EQ t, x, 0`
    /// - `a && b` as `(a != 0) * (b != 0)`
    /// - `a || b` as `((a != 0) + (b != 0)) != 0`
    pub fn gen_expr(&mut self, expr: &Expr) -> Operand {
        match expr {
            Expr::Const { value, .. } => Operand::Const(*value),
            Expr::VarRef { name, .. } => {
                let dest = self.new_temp();
                self.emit(Instruction::Load { dest: dest.clone(),
                                              var:  name.clone(), });
                dest
            },
            Expr::Unary { op, operand, .. } => {
                let value = self.gen_expr(operand);
                match op {
                    UnaryOperator::Negate => self.emit_binary(TacOp::Sub, Operand::Const(0), value),
                    UnaryOperator::Not => self.emit_binary(TacOp::Eq, value, Operand::Const(0)),
                }
            },
            Expr::Binary { left, op, right, .. } => {
                let lhs = self.gen_expr(left);
                let rhs = self.gen_expr(right);

                if let Some(tac_op) = TacOp::from_operator(*op) {
                    return self.emit_binary(tac_op, lhs, rhs);
                }

                let lhs = self.emit_binary(TacOp::Neq, lhs, Operand::Const(0));
                let rhs = self.emit_binary(TacOp::Neq, rhs, Operand::Const(0));
                match op {
                    BinaryOperator::And => self.emit_binary(TacOp::Mul, lhs, rhs),
                    _ => {
                        let sum = self.emit_binary(TacOp::Add, lhs, rhs);
                        self.emit_binary(TacOp::Neq, sum, Operand::Const(0))
                    },
                }
            },
        }
    }

    /// Lowers one statement.
    ///
    /// Loops use the two-label pattern:
    /// ```text
    /// LABEL top
    ///   <condition>
    ///   JZ c, end
    ///   <body>
    ///   JMP top
    /// LABEL end
    /// ```
    /// Conditionals jump over the then-block when the condition is zero:
    /// ```text
    ///   <condition>
    ///   JZ c, else
    ///   <then>
    ///   JMP end
    /// LABEL else
    ///   <else>
    /// LABEL end
    /// ```
    pub fn gen_stmt(&mut self, statement: &Statement) {
        match statement {
            Statement::Decl { names, .. } => {
                for name in names {
                    self.emit(Instruction::Declare { var: name.clone() });
                }
            },
            Statement::Assign { target, value, .. } => {
                let src = self.gen_expr(value);
                self.emit(Instruction::Store { var: target.clone(),
                                               src });
            },
            Statement::Print { value, .. } => {
                let src = self.gen_expr(value);
                self.emit(Instruction::Print { src });
            },
            Statement::While { condition, body, .. } => {
                let top = self.new_label();
                let end = self.new_label();

                self.emit(Instruction::Label { name: top });
                let src = self.gen_expr(condition);
                self.emit(Instruction::JumpIfZero { src, label: end });
                self.gen_block(body);
                self.emit(Instruction::Jump { label: top });
                self.emit(Instruction::Label { name: end });
            },
            Statement::If { condition,
                            then_body,
                            else_body,
                            .. } => {
                let otherwise = self.new_label();
                let end = self.new_label();

                let src = self.gen_expr(condition);
                self.emit(Instruction::JumpIfZero { src,
                                                    label: otherwise });
                self.gen_block(then_body);
                self.emit(Instruction::Jump { label: end });
                self.emit(Instruction::Label { name: otherwise });
                self.gen_block(else_body);
                self.emit(Instruction::Label { name: end });
            },
        }
    }

    fn gen_block(&mut self, block: &Block) {
        for statement in &block.statements {
            self.gen_stmt(statement);
        }
    }
}
