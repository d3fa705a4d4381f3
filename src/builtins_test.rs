use super::*;

use crate::lang_err::ErrKind;


fn ints(v: &[i64]) -> Args {
    v.iter().map(|i| Value::from(*i)).collect()
}

#[test]
fn arithmetic() {
    assert_eq!(add(ints(&[3, 5])).unwrap(), Value::from(8));
    assert_eq!(sub(ints(&[10, 4])).unwrap(), Value::from(6));
    assert_eq!(mul(ints(&[5, 8])).unwrap(), Value::from(40));
    assert_eq!(div(ints(&[20, 5])).unwrap(), Value::from(4));
}

#[test]
fn folds_left_to_right() {
    assert_eq!(sub(ints(&[10, 4, 3])).unwrap(), Value::from(3));
    assert_eq!(div(ints(&[100, 5, 2])).unwrap(), Value::from(10));
    assert_eq!(sub(ints(&[7])).unwrap(), Value::from(7));
}

#[test]
fn mixed_numbers() {
    let args = vec![Value::from(1), Value::from(0.5)];
    assert_eq!(add(args).unwrap(), Value::from(1.5));
    let args = vec![Value::from(7), Value::from(2.0)];
    assert_eq!(div(args).unwrap(), Value::from(3.5));
}

#[test]
fn needs_an_argument() {
    for f in [add, sub, mul, div].iter() {
        let err = f(vec![]).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrKind::WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            }
        );
    }
}

#[test]
fn non_numeric() {
    let err = mul(vec![Value::from(2), Value::from(true)]).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrKind::InvalidArgument {
            given: Value::from(true),
            expected: Cow::Borrowed("a Number"),
        }
    );
}

#[test]
fn string_concat() {
    let args = vec![Value::from("ab"), Value::from("cd")];
    assert_eq!(add(args).unwrap(), Value::from("abcd"));

    let err = add(vec![Value::from("ab"), Value::from(1)]).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::InvalidArgument { .. }));
}

#[test]
fn division_by_zero() {
    let err = div(ints(&[1, 0])).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::Arithmetic(_)));

    let res = div(vec![Value::from(1.0), Value::from(0)]).unwrap();
    assert_eq!(res, Value::from(f64::INFINITY));
}

#[test]
fn comparisons() {
    assert_eq!(lt(ints(&[4, 10])).unwrap(), Value::from(true));
    assert_eq!(gt(ints(&[7, 2])).unwrap(), Value::from(true));
    assert_eq!(gt(ints(&[2, 2])).unwrap(), Value::from(false));
    assert_eq!(
        lt(vec![Value::from(1), Value::from(1.5)]).unwrap(),
        Value::from(true)
    );
    assert_eq!(
        lt(vec![Value::from("a"), Value::from("b")]).unwrap(),
        Value::from(true)
    );
}

#[test]
fn comparison_arity() {
    for args in [ints(&[1]), ints(&[1, 2, 3])].iter() {
        let err = lt(args.clone()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrKind::WrongArgumentCount {
                given: args.len(),
                expected: ExpectedCount::Exactly(2),
            }
        );
    }

    let err = gt(vec![Value::from(1), Value::from("x")]).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::InvalidArgument { .. }));
}

#[test]
fn print_joins_args() {
    let mut out = Vec::<u8>::new();
    let args = vec![Value::from("Hello"), Value::from(3), Value::from(2.0), Value::from(false)];
    let res = print(args, &mut out).unwrap();
    assert_eq!(res, Value::from("Hello 3 2.0 false"));
    assert_eq!(String::from_utf8(out).unwrap(), "Hello 3 2.0 false\n");
}

#[test]
fn print_chomps_result() {
    let mut out = Vec::<u8>::new();
    let res = print(vec![Value::from("line\n")], &mut out).unwrap();
    assert_eq!(res, Value::from("line"));
    assert_eq!(String::from_utf8(out).unwrap(), "line\n");

    let mut out = Vec::<u8>::new();
    let res = print(vec![Value::from("a"), Value::from("b\r\n")], &mut out).unwrap();
    assert_eq!(res, Value::from("a b"));
    assert_eq!(String::from_utf8(out).unwrap(), "a b\n");

    let mut out = Vec::<u8>::new();
    let res = print(vec![Value::from("cr\r")], &mut out).unwrap();
    assert_eq!(res, Value::from("cr"));
    assert_eq!(String::from_utf8(out).unwrap(), "cr\n");

    // Only one line ending is dropped.
    let mut out = Vec::<u8>::new();
    let res = print(vec![Value::from("two\n\n")], &mut out).unwrap();
    assert_eq!(res, Value::from("two\n"));
    assert_eq!(String::from_utf8(out).unwrap(), "two\n\n");
}

#[test]
fn global_environment() {
    let env = make_global_environment_with_output(Box::new(std::io::sink()));
    for builtin in BuiltIn::ALL.iter() {
        assert_eq!(
            env.lookup(builtin.name()),
            Some(&Value::BuiltIn(*builtin))
        );
    }
    assert_eq!(env.lookup(COUNTER), Some(&Value::from(0)));
    assert_eq!(
        env.symbols(),
        vec!["*", "+", "-", "/", "<", ">", "_", "print"]
    );
}
