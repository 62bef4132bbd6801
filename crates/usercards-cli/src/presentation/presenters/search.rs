use usercards_engine::{build_list, filter, normalize_query};
use usercards_types::Directory;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ProfileViewModel, SearchResultViewModel, StatusBadge,
    ViewTreeViewModel,
};

pub fn present_search(
    query: &str,
    directory: &Directory,
) -> CommandResultViewModel<SearchResultViewModel> {
    let normalized = normalize_query(query);
    let matched = filter(query, directory.all());

    let content = SearchResultViewModel {
        query: (!normalized.is_empty()).then(|| normalized.clone()),
        total: directory.len(),
        matches: matched.iter().map(ProfileViewModel::from).collect(),
        view: build_list(&matched),
    };

    if content.matches.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!(
                "No profiles match \"{}\"",
                normalized
            )))
            .with_suggestion(
                Guidance::new("List every profile").with_command("usercards list"),
            );
    }

    let label = if normalized.is_empty() {
        format!("{} profiles", content.total)
    } else {
        format!(
            "{} of {} profiles match \"{}\"",
            content.matches.len(),
            content.total,
            normalized
        )
    };
    CommandResultViewModel::new(content).with_badge(StatusBadge::info(label))
}

pub fn present_list(directory: &Directory) -> CommandResultViewModel<SearchResultViewModel> {
    present_search("", directory)
}

pub fn present_tree(query: &str, directory: &Directory) -> CommandResultViewModel<ViewTreeViewModel> {
    let matched = filter(query, directory.all());
    CommandResultViewModel::new(ViewTreeViewModel {
        query: query.to_string(),
        tree: build_list(&matched),
    })
}
