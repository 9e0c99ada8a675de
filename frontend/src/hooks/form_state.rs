use yew::prelude::*;

/// A single message line under the option form.
#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub handle_error: Callback<String>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);

    let handle_error = {
        let error = error.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
        })
    };

    let clear = {
        let error = error.clone();
        Callback::from(move |_: ()| {
            error.set(String::new());
        })
    };

    FormState {
        error: (*error).clone(),
        handle_error,
        clear,
    }
}
