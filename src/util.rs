/// Checked integer arithmetic helpers.
///
/// Both back ends compute through these functions, so division by zero and
/// overflow are reported the same way whether a program is tree-walked or
/// executed as three-address code.
pub mod num;
