//! Property tests for effect composition laws.

use proptest::prelude::*;
use sidekick::effect::parallel::{par_sequence, par_zip, par_zip3, par_zip4, par_zip5};
use sidekick::effect::sequential::sequence;
use sidekick::testing::RunCounter;
use sidekick::{Effect, ErrorList};

fn from(result: Result<i32, String>) -> Effect<i32, String> {
    Effect::from_result(result)
}

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok),
        "[a-z]{1,8}".prop_map(Err),
    ]
}

fn expected_errors(results: &[Result<i32, String>]) -> Vec<String> {
    results
        .iter()
        .filter_map(|r| r.as_ref().err().cloned())
        .collect()
}

proptest! {
    #[test]
    fn prop_map_identity(result in result_strategy()) {
        let mapped = from(result.clone()).map(|x| x).block().unwrap();
        prop_assert_eq!(mapped, result);
    }

    #[test]
    fn prop_map_err_identity(result in result_strategy()) {
        let mapped = from(result.clone()).map_err(|e| e).block().unwrap();
        prop_assert_eq!(mapped, result);
    }

    #[test]
    fn prop_and_then_associative(start in result_strategy(), a in any::<i16>(), b in any::<i16>()) {
        let f = move |x: i32| -> Effect<i32, String> {
            if a % 3 == 0 { Effect::fail(format!("f rejected {}", x)) } else { Effect::succeed(x.wrapping_add(a as i32)) }
        };
        let g = move |x: i32| -> Effect<i32, String> {
            if b % 5 == 0 { Effect::fail(format!("g rejected {}", x)) } else { Effect::succeed(x.wrapping_mul(b as i32)) }
        };

        let left = from(start.clone()).and_then(f).and_then(g).block().unwrap();
        let right = from(start).and_then(move |x| f(x).and_then(g)).block().unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_sequence_fails_fast(results in prop::collection::vec(result_strategy(), 0..12)) {
        let counter = RunCounter::new();
        let effects: Vec<_> = results.iter().cloned().map(|r| counter.watch(from(r))).collect();
        let outcome = sequence(effects).block().unwrap();

        match results.iter().position(Result::is_err) {
            Some(k) => {
                prop_assert_eq!(outcome, Err(results[k].clone().unwrap_err()));
                prop_assert_eq!(counter.runs(), k + 1);
            }
            None => {
                prop_assert_eq!(counter.runs(), results.len());
                let values: Vec<i32> = results.into_iter().map(|r| r.unwrap()).collect();
                prop_assert_eq!(outcome, Ok(values));
            }
        }
    }

    #[test]
    fn prop_par_sequence_accumulates_in_order(results in prop::collection::vec(result_strategy(), 0..12)) {
        let counter = RunCounter::new();
        let effects: Vec<_> = results.iter().cloned().map(|r| counter.watch(from(r))).collect();
        let outcome = par_sequence(effects).block().unwrap();

        let errors = expected_errors(&results);
        prop_assert_eq!(counter.runs(), results.len());
        if errors.is_empty() {
            let values: Vec<i32> = results.into_iter().map(|r| r.unwrap()).collect();
            prop_assert_eq!(outcome, Ok(values));
        } else {
            prop_assert_eq!(outcome, Err(ErrorList::from(errors)));
        }
    }

    #[test]
    fn prop_par_zip_identity(a in any::<i32>(), b in any::<i32>()) {
        let outcome = par_zip(Effect::<_, String>::succeed(a), Effect::succeed(b)).block().unwrap();
        prop_assert_eq!(outcome, Ok((a, b)));
    }

    #[test]
    fn prop_par_zip_single_failure(a in any::<i32>(), error in "[a-z]{1,8}", fail_first in any::<bool>()) {
        let (first, second) = if fail_first {
            (from(Err(error.clone())), from(Ok(a)))
        } else {
            (from(Ok(a)), from(Err(error.clone())))
        };
        let outcome = par_zip(first, second).block().unwrap();
        prop_assert_eq!(outcome, Err(ErrorList::one(error)));
    }

    #[test]
    fn prop_nary_zip_flattens_in_operand_order(results in prop::collection::vec(result_strategy(), 5)) {
        let r = &results;
        let errors3 = expected_errors(&r[..3]);
        let errors4 = expected_errors(&r[..4]);
        let errors5 = expected_errors(&r[..5]);

        let three = par_zip3(from(r[0].clone()), from(r[1].clone()), from(r[2].clone()))
            .block()
            .unwrap();
        let four = par_zip4(
            from(r[0].clone()),
            from(r[1].clone()),
            from(r[2].clone()),
            from(r[3].clone()),
        )
        .block()
        .unwrap();
        let five = par_zip5(
            from(r[0].clone()),
            from(r[1].clone()),
            from(r[2].clone()),
            from(r[3].clone()),
            from(r[4].clone()),
        )
        .block()
        .unwrap();

        prop_assert_eq!(three.err().map(ErrorList::into_vec).unwrap_or_default(), errors3);
        prop_assert_eq!(four.err().map(ErrorList::into_vec).unwrap_or_default(), errors4);
        prop_assert_eq!(five.err().map(ErrorList::into_vec).unwrap_or_default(), errors5);
    }
}
