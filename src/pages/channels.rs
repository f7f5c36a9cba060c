use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::channels::ChannelSummary;
use crate::state::{Action, Tracker};

#[derive(Properties, PartialEq)]
pub struct ChannelsPageProps {
    pub channels: Vec<ChannelSummary>,
    pub dispatcher: UseReducerDispatcher<Tracker>,
}

#[function_component(ChannelsPage)]
pub fn channels_page(props: &ChannelsPageProps) -> Html {
    html! {
        <section id="channelsView">
            <div id="channelContainer" class="channel-grid">
                { for props.channels.iter().map(|chan| {
                    let onclick = {
                        let dispatcher = props.dispatcher.clone();
                        let name = chan.name.clone();
                        Callback::from(move |_| dispatcher.dispatch(Action::SelectChannel(name.clone())))
                    };
                    html! {
                        <div class="channel-card" key={chan.name.clone()} {onclick}>
                            <div class="channel-info">
                                <h3>
                                    <Icon icon_id={IconId::LucideUser} width={"18"} height={"18"} />
                                    { format!(" {}", chan.name) }
                                </h3>
                                <p>{ format!("{} videos", chan.count) }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
