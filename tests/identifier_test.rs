use s3shard::{ParseError, ShardFunction, ShardIdentifier};

fn sample_keys() -> Vec<&'static str> {
    vec![
        "",
        "a",
        "ab",
        "abc",
        "abcd",
        "CIQJ7IHPGOFUJT5UMXIW6CUDSNH6AVKMEOXI3UM3VLYJRZUISUMGCXQ",
    ]
}

#[test]
fn test_round_trip_behavior() {
    for function in ShardFunction::ALL {
        for param in [0, 1, 2, 3, 8, 64] {
            let original = ShardIdentifier::new(function, param);
            let decoded = ShardIdentifier::parse(&original.to_string()).unwrap();

            assert_eq!(decoded, original);
            assert_eq!(decoded.to_string(), original.to_string());
            for key in sample_keys() {
                assert_eq!(decoded.shard(key), original.shard(key));
            }
        }
    }
}

#[test]
fn test_documented_examples() {
    let cases = [
        ("/repo/s3/shard/v1/identity/0", ShardIdentifier::identity(0)),
        ("/repo/s3/shard/v1/prefix/2", ShardIdentifier::prefix(2)),
        ("/repo/s3/shard/v1/suffix/3", ShardIdentifier::suffix(3)),
        (
            "/repo/s3/shard/v1/next-to-last/8",
            ShardIdentifier::next_to_last(8),
        ),
    ];
    for (text, id) in cases {
        assert_eq!(text.parse::<ShardIdentifier>().unwrap(), id);
        assert_eq!(id.to_string(), text);
    }
}

#[test]
fn test_decode_prefix_transform() {
    let id = ShardIdentifier::parse("/repo/s3/shard/v1/prefix/2").unwrap();
    assert_eq!(id.name(), "prefix");
    assert_eq!(id.param(), 2);
    let transform = id.transform();
    assert_eq!(transform("abc"), "ab");
}

#[test]
fn test_decode_failures() {
    assert_eq!(ShardIdentifier::parse(""), Err(ParseError::Empty));
    assert!(matches!(
        ShardIdentifier::parse("/repo/s3/shard/v1/bogus/2"),
        Err(ParseError::UnknownFunction(name)) if name == "bogus"
    ));
    assert!(matches!(
        ShardIdentifier::parse("/repo/flatfs/shard/v1/prefix/2"),
        Err(ParseError::MissingPrefix(_))
    ));
    assert!(matches!(
        ShardIdentifier::parse("/repo/s3/shard/v1/prefix/2/extra"),
        Err(ParseError::Malformed(_))
    ));
    assert!(matches!(
        ShardIdentifier::parse("/repo/s3/shard/v0/prefix/2"),
        Err(ParseError::UnsupportedVersion(v)) if v == "v0"
    ));
    assert!(matches!(
        ShardIdentifier::parse("/repo/s3/shard/v1/prefix/2.5"),
        Err(ParseError::InvalidParameter(_))
    ));
}

#[test]
fn test_decode_is_deterministic() {
    let input = "/repo/s3/shard/v1/suffix/abc";
    assert_eq!(ShardIdentifier::parse(input), ShardIdentifier::parse(input));
}

#[test]
fn test_serde_uses_canonical_form() {
    let id = ShardIdentifier::suffix(3);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#""/repo/s3/shard/v1/suffix/3""#);

    let back: ShardIdentifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);

    assert!(serde_json::from_str::<ShardIdentifier>(r#""/repo/s3/shard/v9/suffix/3""#).is_err());
}
