//! Whole-document tests asserting the exact write sequence, with each
//! scenario read from several formatting variants that must all produce
//! identical records.

use crate::FramingMarker;
use crate::tests::utils;

/// Verifies the smallest possible document across whitespace, comma, and
/// comment variants.
#[test]
fn anonymous_query() {
    utils::assert_same_records(
        &[
            "{foo}",
            " {foo}",
            "{foo} ",
            "{ foo }",
            "{\nfoo\n}",
            "{,foo,}",
            "\t{\tfoo\t}\t",
            "#leading comment\n{foo}",
            "{foo}#trailing comment",
            "{ #inner\n foo }",
        ],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("foo"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies that the bare `query` keyword and the anonymous shorthand
/// produce the same records.
#[test]
fn query_keyword_is_equivalent_to_shorthand() {
    utils::assert_same_records(
        &["{foo bar}", "{foo,bar}", "query{foo bar}", "query {foo,bar}"],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("foo"),
            utils::marker(FramingMarker::Field),
            utils::payload("bar"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies that operation keywords match by prefix, so a missing
/// boundary byte between keyword and name does not change the records.
#[test]
fn operation_keywords_match_by_prefix() {
    utils::assert_same_records(
        &["query Q{f}", "queryQ{f}", "query\nQ{f}"],
        &[
            utils::marker(FramingMarker::Query),
            utils::payload("Q"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("f"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies a named mutation with a string argument.
#[test]
fn named_mutation_with_argument() {
    utils::assert_same_records(
        &[
            r#"mutation GQL{addStandard(name:"GraphQL")}"#,
            "mutation GQL {\n  addStandard( name: \"GraphQL\" )\n}",
            "mutation\nGQL\n{addStandard(name:\"GraphQL\")}",
        ],
        &[
            utils::marker(FramingMarker::Mutation),
            utils::payload("GQL"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("addStandard"),
            utils::marker(FramingMarker::Argument),
            utils::payload("name"),
            utils::marker(FramingMarker::ValueString),
            utils::payload("GraphQL"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies a subscription with a variable definition carrying a default
/// value, an operation directive, and a multi-byte string payload.
#[test]
fn subscription_with_variable_definitions() {
    utils::assert_same_records(
        &[
            "subscription Updates($channel:T=\"жツ\")@ok{updates(channel:$channel limit:5){id}}",
            "subscription Updates ( $channel : T = \"жツ\" ) @ok {\n  updates(channel: $channel, limit: 5) { id }\n}",
            "subscription Updates($ channel : T = \"жツ\") @ ok\n{updates(channel:$channel,limit:5){id}}",
        ],
        &[
            utils::marker(FramingMarker::Subscription),
            utils::payload("Updates"),
            utils::marker(FramingMarker::VariableDefinition),
            utils::payload("channel"),
            utils::marker(FramingMarker::Type),
            utils::payload("T"),
            utils::marker(FramingMarker::ValueString),
            utils::payload("жツ"),
            utils::marker(FramingMarker::Directive),
            utils::payload("ok"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("updates"),
            utils::marker(FramingMarker::Argument),
            utils::payload("channel"),
            utils::marker(FramingMarker::ValueVariable),
            utils::payload("channel"),
            utils::marker(FramingMarker::Argument),
            utils::payload("limit"),
            utils::marker(FramingMarker::ValueInt),
            utils::payload("5"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("id"),
            utils::marker(FramingMarker::SelectionSetEnd),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies that type references in variable definitions contribute their
/// tightly packed text, so interior formatting inside the reference is
/// invisible.
#[test]
fn variable_definition_types_are_written_tightly() {
    utils::assert_same_records(
        &[
            "query Q($a:[T!]!=[1],$b:S){f(x:$a)}",
            "query Q ( $a : [ T ! ] ! = [ 1 ] , $b : S ) { f ( x : $a ) }",
            "query Q($a: [,T,!,]! = [ 1 ] $b:\nS){f(x:$a)}",
        ],
        &[
            utils::marker(FramingMarker::Query),
            utils::payload("Q"),
            utils::marker(FramingMarker::VariableDefinition),
            utils::payload("a"),
            utils::marker(FramingMarker::Type),
            utils::payload("["),
            utils::payload("T"),
            utils::payload("!"),
            utils::payload("]"),
            utils::payload("!"),
            utils::marker(FramingMarker::ValueList),
            utils::marker(FramingMarker::ValueInt),
            utils::payload("1"),
            utils::marker(FramingMarker::ValueListEnd),
            utils::marker(FramingMarker::VariableDefinition),
            utils::payload("b"),
            utils::marker(FramingMarker::Type),
            utils::payload("S"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("f"),
            utils::marker(FramingMarker::Argument),
            utils::payload("x"),
            utils::marker(FramingMarker::ValueVariable),
            utils::payload("a"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies variable definitions carrying their own directives.
#[test]
fn variable_definition_directives() {
    utils::assert_same_records(
        &[
            "query($v:Int @bounded(max:10)){f}",
            "query ( $v : Int @bounded ( max : 10 ) ) { f }",
        ],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::VariableDefinition),
            utils::payload("v"),
            utils::marker(FramingMarker::Type),
            utils::payload("Int"),
            utils::marker(FramingMarker::Directive),
            utils::payload("bounded"),
            utils::marker(FramingMarker::Argument),
            utils::payload("max"),
            utils::marker(FramingMarker::ValueInt),
            utils::payload("10"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("f"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies a document mixing an operation with spreads and inline
/// fragments against a fragment definition with a directive.
#[test]
fn fragments_and_spreads() {
    let pretty = "\
query {
  ...personalInfo
  ... on User { email }
  ... @include(if: $flag) { secret }
}
fragment personalInfo on Person @translated(lang: \"de\") { name }
";
    let minified = "query{...personalInfo ... on User{email}...@include(if:$flag){secret}}\
fragment personalInfo on Person@translated(lang:\"de\"){name}";
    utils::assert_same_records(
        &[pretty, minified],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::FragmentSpread),
            utils::payload("personalInfo"),
            utils::marker(FramingMarker::InlineFragment),
            utils::marker(FramingMarker::Type),
            utils::payload("User"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("email"),
            utils::marker(FramingMarker::SelectionSetEnd),
            utils::marker(FramingMarker::InlineFragment),
            utils::marker(FramingMarker::Directive),
            utils::payload("include"),
            utils::marker(FramingMarker::Argument),
            utils::payload("if"),
            utils::marker(FramingMarker::ValueVariable),
            utils::payload("flag"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("secret"),
            utils::marker(FramingMarker::SelectionSetEnd),
            utils::marker(FramingMarker::SelectionSetEnd),
            utils::marker(FramingMarker::FragmentDefinition),
            utils::payload("personalInfo"),
            utils::marker(FramingMarker::Type),
            utils::payload("Person"),
            utils::marker(FramingMarker::Directive),
            utils::payload("translated"),
            utils::marker(FramingMarker::Argument),
            utils::payload("lang"),
            utils::marker(FramingMarker::ValueString),
            utils::payload("de"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("name"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies that a document may hold several definitions, concatenated
/// in source order.
#[test]
fn multiple_definitions() {
    utils::assert_same_records(
        &["{foo} {bar}", "{foo}{bar}", "{foo}\n\n{bar}", "{foo},{bar}"],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("foo"),
            utils::marker(FramingMarker::SelectionSetEnd),
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("bar"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies directives attached to the operation itself, before the
/// selection set.
#[test]
fn operation_directives() {
    utils::assert_same_records(
        &[
            "query @cached(ttl:300) {greeting}",
            "query@cached(ttl:300){greeting}",
        ],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::Directive),
            utils::payload("cached"),
            utils::marker(FramingMarker::Argument),
            utils::payload("ttl"),
            utils::marker(FramingMarker::ValueInt),
            utils::payload("300"),
            utils::marker(FramingMarker::SelectionSet),
            utils::marker(FramingMarker::Field),
            utils::payload("greeting"),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}

/// Verifies a directive argument carrying an input object with a list,
/// exercising the value walker from document level.
#[test]
fn directive_with_structured_argument() {
    utils::assert_same_records(
        &[
            "query @translated(opts:{langs:[DE EN FR] strict:true}) {greeting}",
            "query @translated(opts: {langs: [DE, EN, FR], strict: true}) {\n  greeting\n}",
        ],
        &[
            utils::marker(FramingMarker::Query),
            utils::marker(FramingMarker::Directive),
            utils::payload("translated"),
            utils::marker(FramingMarker::Argument),
            utils::payload("opts"),
            utils::marker(FramingMarker::ValueInputObject),
            utils::marker(FramingMarker::ValueInputObjectField),
            utils::payload("langs"),
            utils::marker(FramingMarker::ValueList),
            utils::marker(FramingMarker::ValueEnum),
            utils::payload("DE"),
            utils::marker(FramingMarker::ValueEnum),
            utils::payload("EN"),
            utils::marker(FramingMarker::ValueEnum),
            utils::payload("FR"),
            utils::marker(FramingMarker::ValueListEnd),
            utils::marker(FramingMarker::ValueInputObjectField),
            utils::payload("strict"),
            utils::marker(FramingMarker::ValueTrue),
            utils::marker(FramingMarker::ValueInputObjectEnd),
            utils::marker(FramingMarker::SelectionSetEnd),
        ],
    );
}
