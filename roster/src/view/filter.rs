use crate::model::person::Person;

/// Case insensitive substring match on "first last" or on the email
pub fn matches(person: &Person, search: &str) -> bool {
    let needle = search.to_lowercase();

    matches_lowercase(person, &needle)
}

fn matches_lowercase(person: &Person, needle: &str) -> bool {
    person.full_name().to_lowercase().contains(needle)
        || person.email.to_lowercase().contains(needle)
}

/// Returns the people matching `search`, in their original order. An empty
/// search matches everyone.
#[tracing::instrument(skip(people))]
pub fn filter<'a>(people: &'a [Person], search: &str) -> Vec<&'a Person> {
    let needle = search.to_lowercase();

    return people
        .iter()
        .filter(|person| matches_lowercase(person, &needle))
        .collect();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::consts::consts::PersonId;

    use super::*;

    fn people() -> Vec<Person> {
        vec![
            Person::new_test(),
            Person::new("Bo", "Yu", "bo@x.com", 22).with_id(PersonId(2)),
            Person::new("Cara", "Annis", "cara@y.org", 41).with_id(PersonId(3)),
        ]
    }

    fn ids(people: Vec<&Person>) -> Vec<i64> {
        people
            .into_iter()
            .filter_map(|p| p.id.map(PersonId::to_number))
            .collect()
    }

    #[rstest]
    #[case("ann", vec![1, 3])]
    #[case("LEE", vec![1])]
    #[case("x.com", vec![1, 2])]
    #[case("ann lee", vec![1])]
    #[case("o y", vec![2])]
    #[case("zzz", vec![])]
    #[case("", vec![1, 2, 3])]
    fn filters_on_full_name_or_email(#[case] search: &str, #[case] expected: Vec<i64>) {
        let people = people();

        assert_eq!(ids(filter(&people, search)), expected);
    }

    #[test]
    fn single_record_scenario() {
        let people = vec![Person::new_test()];

        for search in ["ann", "LEE", "x.com"] {
            assert_eq!(
                filter(&people, search),
                vec![&people[0]],
                "searching {:?} should find Ann",
                search
            );
        }

        assert!(filter(&people, "zzz").is_empty());
    }

    #[rstest]
    #[case("an")]
    #[case("ann")]
    #[case("LEE")]
    #[case("x.com")]
    #[case("ann lee")]
    #[case("o y")]
    #[case("zzz")]
    #[case("")]
    fn filtering_twice_is_idempotent(#[case] search: &str) {
        let people = people();

        let once: Vec<Person> = filter(&people, search).into_iter().cloned().collect();
        let twice: Vec<Person> = filter(&once, search).into_iter().cloned().collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn name_match_does_not_span_into_email() {
        // "lee ann" only exists if first/last are joined the other way around
        let people = vec![Person::new_test()];

        assert!(!matches(&people[0], "lee ann"));
        assert!(matches(&people[0], "Ann L"));
    }
}
