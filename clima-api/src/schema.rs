// Table and column names follow the deployed database; Rust names are mapped
// with `sql_name`.

diesel::table! {
    #[sql_name = "salas"]
    rooms (id) {
        id -> Integer,
        #[sql_name = "descricao"]
        description -> Text,
        #[sql_name = "andar"]
        floor -> Text,
        #[sql_name = "bloco"]
        block -> Text,
        ip -> Text,
    }
}

diesel::table! {
    #[sql_name = "equipamento"]
    equipment (id) {
        id -> Integer,
        #[sql_name = "modelo"]
        model -> Text,
        #[sql_name = "descricao"]
        description -> Text,
        #[sql_name = "marca"]
        brand -> Text,
        #[sql_name = "id_protocolo"]
        protocol_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "comandos"]
    commands (id) {
        id -> Integer,
        #[sql_name = "comando"]
        command_text -> Text,
        #[sql_name = "descricao"]
        description -> Text,
        #[sql_name = "id_protocolo"]
        protocol_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "agenda"]
    schedules (id) {
        id -> Integer,
        #[sql_name = "disciplina"]
        subject -> Text,
        #[sql_name = "datas"]
        date -> Date,
        #[sql_name = "hora_inicio"]
        start_time -> Time,
        #[sql_name = "hora_fim"]
        end_time -> Time,
        #[sql_name = "id_sala"]
        room_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "logs"]
    log_entries (id) {
        id -> Integer,
        #[sql_name = "datas"]
        date -> Date,
        #[sql_name = "hora"]
        time -> Time,
        #[sql_name = "equipamento"]
        equipment_name -> Text,
        #[sql_name = "id_equipamento"]
        equipment_id -> Integer,
        #[sql_name = "usuario"]
        user_name -> Text,
        #[sql_name = "sala"]
        room_name -> Text,
        #[sql_name = "acao"]
        action -> Text,
    }
}

diesel::table! {
    #[sql_name = "permissoes"]
    permissions (id) {
        id -> Integer,
        #[sql_name = "descricao"]
        description -> Text,
        #[sql_name = "acesso"]
        access_level -> Text,
    }
}

diesel::table! {
    #[sql_name = "usuario"]
    users (id) {
        id -> Integer,
        #[sql_name = "nome"]
        name -> Text,
        email -> Text,
        #[sql_name = "senha"]
        password_hash -> Text,
        #[sql_name = "permissao"]
        permission_label -> Text,
        #[sql_name = "id_permissoes"]
        permission_id -> Integer,
        #[sql_name = "id_logs"]
        log_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "relacao"]
    relations (id) {
        id -> Integer,
        #[sql_name = "id_sala"]
        room_id -> Integer,
        #[sql_name = "id_equipamento"]
        equipment_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "protocolo"]
    protocols (id) {
        id -> Integer,
        #[sql_name = "descricao"]
        description -> Text,
        #[sql_name = "id_comando"]
        command_id -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    commands,
    equipment,
    log_entries,
    permissions,
    protocols,
    relations,
    rooms,
    schedules,
    users,
);
