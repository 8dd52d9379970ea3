//! End-to-end scenarios straight out of the design's testable-properties
//! section: assemble a program, run it against a captured stdout buffer,
//! and check what actually happened.

use vortex::Vm;

fn run(source: &str) -> String {
    let (instructions, labels) = vortex_asm::parse(source, "scenario.vx").expect("parse");
    let entry = vortex_asm::entry_point(&labels).expect("entry point");
    let mut vm = Vm::with_output(Vec::new());
    vm.run(&instructions, entry).expect("run");
    String::from_utf8(vm.into_output()).unwrap()
}

/// Like `run`, but for programs that are expected to abort mid-execution:
/// returns whatever reached stdout before the fatal error, plus the error
/// itself, instead of panicking on a non-`Ok` result.
fn run_to_failure(source: &str) -> (String, vortex::RuntimeError) {
    let (instructions, labels) = vortex_asm::parse(source, "scenario.vx").expect("parse");
    let entry = vortex_asm::entry_point(&labels).expect("entry point");
    let mut vm = Vm::with_output(Vec::new());
    let err = vm.run(&instructions, entry).expect_err("expected a runtime error");
    let output = String::from_utf8(vm.into_output()).unwrap();
    (output, err)
}

#[test]
fn scenario_a_arithmetic_and_print() {
    let source = "\
main:
mov r0 2
mov r1 3
add r0 r1
print r0
";
    assert_eq!(run(source), "5\n");
}

#[test]
fn scenario_b_conditional_skip_idiom() {
    // `small`/`large` here are reached via `jmp`, not `call`, so their
    // trailing `return` pops an empty call stack once the branch prints —
    // a fatal StackUnderflow, not a clean exit. Scenario B only guarantees
    // that `1` is printed before that happens.
    let source = "\
main:
mov r0 7
iflt r0 10
jmp small
jmp large
small:
print 1
return
large:
print 2
return
";
    let (output, err) = run_to_failure(source);
    assert_eq!(output, "1\n");
    assert_eq!(
        err,
        vortex::RuntimeError::StackUnderflow(vortex::error::StackKind::Call)
    );
}

#[test]
fn scenario_c_recursive_factorial() {
    let source = "\
fact:
ifgt r0 1
jmp recurse
mov r1 1
return
recurse:
push r0
sub r0 1
call fact
pop r0
mul r1 r0
return

main:
mov r0 5
call fact
print r1
";
    assert_eq!(run(source), "120\n");
}

#[test]
fn scenario_d_forward_label_reference() {
    let source = "\
main:
jmp later
print 999
later:
print 1
";
    assert_eq!(run(source), "1\n");
}

#[test]
fn scenario_e_conflicting_label_rejected_before_execution() {
    let source = "\
foo:
foo:
main:
return
";
    let err = vortex_asm::parse(source, "scenario.vx").unwrap_err();
    assert!(matches!(
        err,
        vortex_asm::ParseError::ConflictingLabel { .. }
    ));
}

#[test]
fn scenario_f_integer_mod_vs_floating_division() {
    let mod_source = "\
main:
mov r0 7
mov r1 2
mod r0 r1
print r0
";
    assert_eq!(run(mod_source), "1\n");

    let divf_source = "\
main:
mov r0 7
divf r0 2
print r0
";
    assert_eq!(run(divf_source), "3.5\n");
}

#[test]
fn unknown_label_reference_is_a_parse_time_error() {
    let source = "main:\njmp nowhere\n";
    let err = vortex_asm::parse(source, "t.vx").unwrap_err();
    assert!(matches!(err, vortex_asm::ParseError::UnknownLabel { .. }));
}

#[test]
fn division_by_zero_aborts_execution_with_a_runtime_error() {
    let source = "main:\nmov r0 1\ndiv r0 0\n";
    let (instructions, labels) = vortex_asm::parse(source, "t.vx").unwrap();
    let entry = vortex_asm::entry_point(&labels).unwrap();
    let mut vm = Vm::with_output(Vec::new());
    let err = vm.run(&instructions, entry).unwrap_err();
    assert_eq!(err, vortex::RuntimeError::DivByZero);
}

#[test]
fn stack_push_survives_a_call_so_fib_style_recursion_works() {
    // Regression check for the two-stacks design note: user-pushed values
    // must not be disturbed by a `call`/`return` in between.
    let source = "\
helper:
return

main:
push 42
call helper
pop r0
print r0
";
    assert_eq!(run(source), "42\n");
}
