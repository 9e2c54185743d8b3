use crate::model::Catalog;

/// What an unregister button asks for when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnregisterIntent {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    pub unregister: UnregisterIntent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.spots_left < 0
    }
}

/// One refresh cycle's worth of UI: the cards and the select options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<String>,
}

pub fn render(catalog: &Catalog) -> BoardView {
    let mut view = BoardView::default();
    for (name, activity) in catalog.iter() {
        let participants = activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
                unregister: UnregisterIntent {
                    activity: name.to_string(),
                    email: email.clone(),
                },
            })
            .collect();

        view.cards.push(ActivityCard {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        });
        view.options.push(name.to_string());
    }
    view
}
