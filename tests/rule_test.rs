mod common;

use jasminc::front::{
    frame::LocalTable,
    rule::{RuleType, SemValue},
    Error, SemType,
};

#[test]
fn literal_rules() {
    assert_eq!(Ok(SemValue::Int(3)), RuleType::int(3).value());
    assert_eq_eps!(0.1, RuleType::float(0.1));
    assert_eq!(Ok(SemValue::Float(0.1)), RuleType::float(0.1).value());
    assert_eq!(
        Ok(SemValue::String("hi".to_string())),
        RuleType::string("hi").value()
    );
}

#[test]
fn identifier_rule_carries_slot() {
    let mut locals = LocalTable::new();
    let slot = locals.declare("count", SemType::StrongInt).unwrap();

    let mut rule = RuleType::identifier("count", SemType::StrongInt).with_reg(slot);
    rule.i_val = 10;

    assert_eq!(Some(slot), rule.reg);
    assert_eq!(Some((slot, rule.ty)), locals.lookup("count"));
    assert_eq!(Ok(SemValue::StrongInt(10)), rule.value());
}

#[test]
fn missing_string_payload() {
    let mut rule = RuleType::float(1.0);
    rule.ty = SemType::String;
    assert_error!(rule.value(), Error::MissingPayload(SemType::String));
}
