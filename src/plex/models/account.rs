use serde::Deserialize;

/// JSON body of `POST https://plex.tv/users/sign_in.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct SignInResponse {
    pub user: Option<Account>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: Option<String>,
    pub email: Option<String>,
    pub auth_token: Option<String>,
}
