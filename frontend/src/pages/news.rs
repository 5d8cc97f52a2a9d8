use crate::components::master_detail::MasterDetailContainer;
use crate::hooks::use_master_detail;
use shared::{Column, NewsArticleDto, RefreshPolicy};
use yew::prelude::*;

#[function_component(News)]
pub fn news() -> Html {
    let handle = use_master_detail::<NewsArticleDto>(RefreshPolicy::Refetch);
    let columns = vec![
        Column::new("Headline", "title"),
        Column::new("Author", "author"),
        Column::new("Published", "published_at"),
    ];
    let detail_columns = vec![
        Column::new("Headline", "title"),
        Column::new("Summary", "summary"),
        Column::new("Author", "author"),
        Column::new("Published", "published_at"),
    ];

    html! {
        <MasterDetailContainer<NewsArticleDto>
            {handle}
            title="News"
            {columns}
            {detail_columns}
            editable={false}
        />
    }
}
