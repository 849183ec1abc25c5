use shoresquad_core::CrewMember;
use yew::prelude::*;

use super::helpers::avatar_for;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub crew: Vec<CrewMember>,
    pub on_invite: Callback<()>,
    pub on_edit: Callback<usize>,
    pub on_remove: Callback<usize>,
}

#[function_component(SquadPanel)]
pub fn squad_panel(p: &Props) -> Html {
    let invite = {
        let cb = p.on_invite.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = if p.crew.is_empty() {
        html! {
            <p class="empty-note">{ "No crew members yet. Invite your friends to get started! 👥" }</p>
        }
    } else {
        html! {
            <div class="member-grid" role="list">
                { for p.crew.iter().enumerate().map(|(index, member)| {
                    member_card(index, member, &p.on_edit, &p.on_remove)
                }) }
            </div>
        }
    };

    html! {
        <section id="squad" class="panel squad-panel" aria-label="Squad roster">
            <div class="panel-head">
                <h2>{ "Your Squad" }</h2>
                <span class="stat-count" aria-label="Crew count">{ p.crew.len() }</span>
                <button id="invite-crew-btn" onclick={invite}>{ "➕ Invite Crew" }</button>
            </div>
            { body }
        </section>
    }
}

fn member_card(
    index: usize,
    member: &CrewMember,
    on_edit: &Callback<usize>,
    on_remove: &Callback<usize>,
) -> Html {
    let edit = {
        let cb = on_edit.clone();
        Callback::from(move |_| cb.emit(index))
    };
    let remove = {
        let cb = on_remove.clone();
        Callback::from(move |_| cb.emit(index))
    };
    html! {
        <div class="member-card" role="listitem" key={member.id}>
            <div class="card-actions">
                <button
                    class="edit-member-btn"
                    aria-label={format!("Edit {}", member.name)}
                    onclick={edit}
                >{ "✏️" }</button>
                <button
                    class="delete-member-btn"
                    aria-label={format!("Remove {}", member.name)}
                    onclick={remove}
                >{ "🗑️" }</button>
            </div>
            <div class="member-avatar" aria-hidden="true">{ avatar_for(index) }</div>
            <div class="member-name">{ &member.name }</div>
            <div class="member-role">{ &member.role }</div>
        </div>
    }
}
