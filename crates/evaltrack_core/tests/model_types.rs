use evaltrack_core::{Skill, SkillKind, Status};

#[test]
fn status_discriminants_roundtrip() {
    assert_eq!(Status::Active.to_db(), 1);
    assert_eq!(Status::Inactive.to_db(), 0);
    assert_eq!(Status::parse(1), Some(Status::Active));
    assert_eq!(Status::parse(0), Some(Status::Inactive));
    assert_eq!(Status::parse(2), None);
    assert_eq!(Status::parse(-1), None);

    assert!(Status::Active.is_active());
    assert!(!Status::Inactive.is_active());
}

#[test]
fn skill_kind_discriminants_roundtrip() {
    assert_eq!(SkillKind::Soft.to_db(), 0);
    assert_eq!(SkillKind::Technical.to_db(), 1);
    assert_eq!(SkillKind::parse(0), Some(SkillKind::Soft));
    assert_eq!(SkillKind::parse(1), Some(SkillKind::Technical));
    assert_eq!(SkillKind::parse(9), None);
}

#[test]
fn skill_serialization_uses_expected_wire_fields() {
    let skill = Skill {
        id: 7,
        name: "rust".to_string(),
        description: Some("systems programming".to_string()),
        kind: SkillKind::Technical,
        status: Status::Active,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&skill).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["type"], "technical");
    assert_eq!(json["status"], "active");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Skill = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, skill);
}
