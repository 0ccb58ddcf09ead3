//! Pure query functions over the university catalog.

use super::University;

/// Fixed number of cards per list page.
pub const PAGE_SIZE: usize = 12;

/// Free-text queries are truncated before matching.
pub const QUERY_MAX_LEN: usize = 100;

/// Case-insensitive exact match on the city field, insertion order preserved.
pub fn universities_by_city<'a>(universities: &'a [University], city: &str) -> Vec<&'a University> {
    let city = city.to_lowercase();
    universities
        .iter()
        .filter(|u| u.city.to_lowercase() == city)
        .collect()
}

/// Sorted distinct program options across a city's universities.
pub fn programs_by_city(universities: &[University], city: &str) -> Vec<String> {
    let mut options: Vec<String> = universities_by_city(universities, city)
        .iter()
        .flat_map(|u| u.programs.iter().cloned())
        .collect();
    options.sort();
    options.dedup();
    options
}

/// Sorted distinct city values.
pub fn cities(universities: &[University]) -> Vec<String> {
    let mut cities: Vec<String> = universities
        .iter()
        .filter(|u| !u.city.is_empty())
        .map(|u| u.city.clone())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}

/// Case-insensitive substring match against name or description. The query
/// is truncated to QUERY_MAX_LEN characters first.
pub fn matches_query(u: &University, query: &str) -> bool {
    let needle: String = query.chars().take(QUERY_MAX_LEN).collect();
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    u.name.to_lowercase().contains(&needle) || u.description.to_lowercase().contains(&needle)
}

/// Exact membership test against a university's program list.
pub fn has_program(u: &University, program: &str) -> bool {
    u.programs.iter().any(|p| p == program)
}

/// Page of results with the clamped page number and total page count.
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

/// Slice out one page of results. The requested page is clamped to
/// `[1, ceil(len / PAGE_SIZE)]`; an empty input yields a single empty page.
pub fn paginate<T>(items: &[T], requested: usize) -> Page<'_, T> {
    let total_pages = items.len().div_ceil(PAGE_SIZE).max(1);
    let page = requested.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    Page {
        items: &items[start.min(items.len())..end],
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize, city: &str) -> Vec<University> {
        (0..n)
            .map(|i| University {
                slug: format!("uni-{}", i),
                name: format!("University {}", i),
                city: city.to_string(),
                image: String::new(),
                photo_url: None,
                description: format!("campus number {}", i),
                requirements: vec![],
                programs: vec!["Business".into(), "IT".into()],
            })
            .collect()
    }

    #[test]
    fn by_city_matches_case_insensitively() {
        let mut list = sample(3, "Dubai");
        list.extend(sample(2, "Sharjah"));
        let hits = universities_by_city(&list, "dUbAi");
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|u| u.city == "Dubai"));
    }

    #[test]
    fn by_city_preserves_insertion_order() {
        let list = sample(4, "Dubai");
        let hits = universities_by_city(&list, "Dubai");
        let slugs: Vec<_> = hits.iter().map(|u| u.slug.as_str()).collect();
        assert_eq!(slugs, vec!["uni-0", "uni-1", "uni-2", "uni-3"]);
    }

    #[test]
    fn programs_by_city_sorted_and_distinct() {
        let mut list = sample(2, "Dubai");
        list[0].programs = vec!["Law".into(), "Business".into()];
        list[1].programs = vec!["Business".into(), "Arts".into()];
        assert_eq!(
            programs_by_city(&list, "Dubai"),
            vec!["Arts", "Business", "Law"]
        );
    }

    #[test]
    fn cities_sorted_and_distinct() {
        let mut list = sample(2, "Sharjah");
        list.extend(sample(1, "Ajman"));
        list.extend(sample(1, "Dubai"));
        assert_eq!(cities(&list), vec!["Ajman", "Dubai", "Sharjah"]);
    }

    #[test]
    fn unknown_program_filter_yields_empty() {
        let list = sample(5, "Dubai");
        let hits: Vec<_> = list.iter().filter(|u| has_program(u, "Medicine")).collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn known_program_filter_is_strict_subset() {
        let mut list = sample(5, "Dubai");
        list[2].programs = vec!["Medicine".into()];
        let hits: Vec<_> = list.iter().filter(|u| has_program(u, "Business")).collect();
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|u| u.slug != "uni-2"));
    }

    #[test]
    fn query_matches_name_or_description() {
        let list = sample(3, "Dubai");
        assert!(matches_query(&list[1], "UNIVERSITY 1"));
        assert!(matches_query(&list[2], "number 2"));
        assert!(!matches_query(&list[0], "medicine"));
    }

    #[test]
    fn query_truncated_to_max_length() {
        let mut list = sample(1, "Dubai");
        list[0].description = "a".repeat(QUERY_MAX_LEN);
        // 150 a's truncate to 100, which the description does contain
        assert!(matches_query(&list[0], &"a".repeat(QUERY_MAX_LEN + 50)));
        // without truncation this would not match
        assert!(!list[0].description.contains(&"a".repeat(QUERY_MAX_LEN + 50)));
    }

    #[test]
    fn pagination_splits_25_items_into_3_pages() {
        let list = sample(25, "Dubai");
        let p1 = paginate(&list, 1);
        assert_eq!(p1.items.len(), 12);
        assert_eq!(p1.total_pages, 3);
        let p3 = paginate(&list, 3);
        assert_eq!(p3.items.len(), 1);
    }

    #[test]
    fn pagination_clamps_out_of_range_pages() {
        let list = sample(25, "Dubai");
        let p = paginate(&list, 99);
        assert_eq!(p.page, 3);
        assert_eq!(p.items.len(), 1);
        let p = paginate(&list, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.items.len(), 12);
    }

    #[test]
    fn pagination_of_empty_list_is_single_empty_page() {
        let list: Vec<University> = vec![];
        let p = paginate(&list, 5);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
        assert!(p.items.is_empty());
    }
}
